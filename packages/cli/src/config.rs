use mindmap_outline::{DeriveOptions, MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "mindmap.config.json";

/// Mindmap configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Deepest outline level to export
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Directory exported Markdown is written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Extension of exported files
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_max_depth() -> usize {
    MAX_DEPTH
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_extension() -> String {
    "md".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Derivation options, with an optional command line override
    pub fn derive_options(&self, max_depth: Option<usize>) -> DeriveOptions {
        DeriveOptions::with_max_depth(max_depth.unwrap_or(self.max_depth))
    }

    /// Get absolute path to output directory, with an optional override
    pub fn get_out_dir(&self, cwd: &str, out_dir: Option<&str>) -> PathBuf {
        PathBuf::from(cwd).join(out_dir.unwrap_or(&self.out_dir))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            out_dir: default_out_dir(),
            extension: default_extension(),
        }
    }
}
