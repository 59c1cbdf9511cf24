use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("Failed to create watcher: {0}")]
    CreateError(#[from] notify::Error),
}

pub type WatcherResult<T> = Result<T, WatcherError>;

/// Watches mindmap documents for changes
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<Event>>,
}

impl FileWatcher {
    pub fn new(path: &Path) -> WatcherResult<Self> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        watcher.watch(path, RecursiveMode::Recursive)?;

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
        })
    }

    /// Block until documents are created or modified.
    ///
    /// Returns `None` once the watcher shuts down.
    pub fn next_changes(&self) -> Option<Vec<PathBuf>> {
        loop {
            match self.receiver.recv() {
                Ok(Ok(event)) => {
                    if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                        continue;
                    }
                    let paths: Vec<PathBuf> = event
                        .paths
                        .into_iter()
                        .filter(|p| is_mindmap_file(p))
                        .collect();
                    if !paths.is_empty() {
                        return Some(paths);
                    }
                }
                Ok(Err(err)) => {
                    tracing::warn!(error = %err, "Watch error");
                }
                Err(_) => return None,
            }
        }
    }
}

/// `.json` files other than the config file
pub fn is_mindmap_file(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("json")
        && path.file_name().and_then(|s| s.to_str()) != Some(crate::config::DEFAULT_CONFIG_NAME)
}
