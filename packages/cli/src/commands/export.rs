use crate::config::Config;
use crate::watcher::{is_mindmap_file, FileWatcher};
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use mindmap_compiler_markdown::export_mindmap;
use mindmap_model::MindmapDocument;
use mindmap_outline::DeriveOptions;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Mindmap .json file or directory containing them
    #[arg(default_value = ".")]
    pub input: PathBuf,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Deepest outline level to export (overrides config)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Re-export when documents change
    #[arg(short, long)]
    pub watch: bool,
}

struct ExportTarget {
    /// Root documents are resolved against; output mirrors the layout below it
    base: PathBuf,
    out_dir: PathBuf,
    extension: String,
    options: DeriveOptions,
    stdout: bool,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = PathBuf::from(cwd).join(&args.input);

    if !input.exists() {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    }

    let base = if input.is_dir() {
        input.clone()
    } else {
        input.parent().map(Path::to_path_buf).unwrap_or_default()
    };

    let target = ExportTarget {
        base: base
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", base.display()))?,
        out_dir: config.get_out_dir(cwd, args.out_dir.as_deref()),
        extension: config.extension.clone(),
        options: config.derive_options(args.max_depth),
        stdout: args.stdout,
    };
    debug!(max_depth = target.options.max_depth, out_dir = %target.out_dir.display(), "Export settings");

    let files = find_mindmap_files(&input)?;
    if files.is_empty() {
        println!("{}", "⚠️  No mindmap .json files found".yellow());
        return Ok(());
    }

    if !target.stdout {
        println!("{}", "📝 Exporting mindmaps...".bright_blue().bold());
        println!("Found {} files", files.len());
    }

    export_all(&files, &target);

    if args.watch {
        println!("\n{}", "👀 Watching for changes...".bright_blue());
        let watcher = FileWatcher::new(&input)?;
        while let Some(changed) = watcher.next_changes() {
            export_all(&changed, &target);
        }
    }

    Ok(())
}

fn export_all(files: &[PathBuf], target: &ExportTarget) {
    let mut success_count = 0;
    let mut error_count = 0;

    for file in files {
        let relative_path = relative_to_base(file, &target.base).unwrap_or_else(|_| file.clone());
        match export_file(file, target) {
            Ok(output_path) => {
                success_count += 1;
                if !target.stdout {
                    println!(
                        "  {} {} → {}",
                        "✓".green(),
                        relative_path.display(),
                        output_path
                    );
                }
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    format!("{:#}", e).red()
                );
            }
        }
    }

    if target.stdout {
        return;
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Exported {} files successfully",
            "✅".green(),
            success_count
        );
    } else {
        println!(
            "{} Exported {} files, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }
}

pub(crate) fn find_mindmap_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && is_mindmap_file(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

fn export_file(file_path: &Path, target: &ExportTarget) -> Result<String> {
    let doc = MindmapDocument::load(file_path)
        .with_context(|| format!("Failed to load {}", file_path.display()))?;
    let markdown = export_mindmap(doc.map(), &target.options);

    if target.stdout {
        println!("{}", markdown);
        return Ok("stdout".to_string());
    }

    let relative_path = relative_to_base(file_path, &target.base)?;
    let output_file = target
        .out_dir
        .join(relative_path)
        .with_extension(&target.extension);

    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_file, markdown)?;

    Ok(output_file.display().to_string())
}

/// Path of a document below the canonical export base. Watch events may
/// report paths in a different form than the walk, so both sides are
/// compared canonicalized.
fn relative_to_base(file_path: &Path, base: &Path) -> Result<PathBuf> {
    let canonical = file_path
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", file_path.display()))?;

    canonical
        .strip_prefix(base)
        .map(Path::to_path_buf)
        .map_err(|_| {
            anyhow!(
                "{} is outside the export root {}",
                file_path.display(),
                base.display()
            )
        })
}
