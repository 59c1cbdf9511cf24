use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use mindmap_model::MindmapDocument;
use mindmap_outline::{derive_mindmap, Outline, RootSelection};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct OutlineArgs {
    /// Mindmap .json file
    pub input: PathBuf,

    /// Deepest outline level to show (overrides config)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn outline(args: OutlineArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = PathBuf::from(cwd).join(&args.input);
    let doc = MindmapDocument::load(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let outline = derive_mindmap(doc.map(), &config.derive_options(args.max_depth));

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&outline)?),
        "text" => print_text(&outline),
        other => return Err(anyhow!("Unknown format: {}. Use: text or json", other)),
    }

    Ok(())
}

fn print_text(outline: &Outline) {
    for entry in outline {
        let indent = "  ".repeat(entry.depth() - 1);
        let first_line = entry.text.lines().next().unwrap_or("");
        println!("{}{} {}", indent, entry.numbering.bright_white().bold(), first_line);
    }

    println!();
    match &outline.root {
        RootSelection::Empty => println!("{}", "Mindmap has no nodes".yellow()),
        RootSelection::InDegreeZero(id) => println!("   Root: {}", id),
        RootSelection::Fallback(id) => println!(
            "   Root: {} {}",
            id,
            "(every node has an inbound edge, using the first node)".yellow()
        ),
    }
    if outline.dangling_edges > 0 {
        println!(
            "   {} {}",
            "Dangling edges skipped:".yellow(),
            outline.dangling_edges
        );
    }
    if outline.truncated_branches > 0 {
        println!(
            "   {} {}",
            "Branches cut by depth bound:".yellow(),
            outline.truncated_branches
        );
    }
}
