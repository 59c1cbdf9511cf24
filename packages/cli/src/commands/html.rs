use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use mindmap_compiler_markdown::{export_mindmap, render_html, render_page};
use mindmap_model::MindmapDocument;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct HtmlArgs {
    /// Markdown file, or a mindmap .json document to export first
    pub input: PathBuf,

    /// Emit a standalone HTML page instead of a fragment
    #[arg(long)]
    pub page: bool,

    /// Deepest outline level when exporting a document (overrides config)
    #[arg(long)]
    pub max_depth: Option<usize>,
}

pub fn html(args: HtmlArgs, cwd: &str) -> Result<()> {
    let path = PathBuf::from(cwd).join(&args.input);

    let (title, markdown) = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        let config = Config::load(cwd)?;
        let doc = MindmapDocument::load(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        let markdown = export_mindmap(doc.map(), &config.derive_options(args.max_depth));
        (doc.map().title.clone(), markdown)
    } else {
        let title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Mindmap")
            .to_string();
        (title, fs::read_to_string(&path)?)
    };

    if args.page {
        println!("{}", render_page(&title, &markdown));
    } else {
        print!("{}", render_html(&markdown));
    }

    Ok(())
}
