use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mindmap_model::{Mindmap, Mutation, SequentialIdGenerator};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Output directory for exported Markdown
    #[arg(short, long, default_value = "dist")]
    pub out_dir: String,

    /// Deepest outline level to export
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing mindmap project...".bright_blue().bold());

    let example_file = PathBuf::from(cwd).join("example.json");
    if !example_file.exists() {
        let example = example_mindmap()?;
        fs::write(&example_file, example.to_json_pretty()?)?;
        println!("  {} Created example.json", "✓".green());
    }

    let defaults = Config::default();
    let config = Config {
        max_depth: args.max_depth.unwrap_or(defaults.max_depth),
        out_dir: args.out_dir.clone(),
        ..defaults
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit example.json");
    println!("  2. Run: mindmap export");
    println!("  3. Check output in {}/", args.out_dir);

    Ok(())
}

/// A small root with two children, built through the same mutations the
/// canvas uses
fn example_mindmap() -> Result<Mindmap> {
    let mut ids = SequentialIdGenerator::from_seed("example");
    let mut map = Mindmap::new("mindmap_example", "Example", "local");

    let texts = ["**Project**", "Goals\n- ship it", "Risks"];
    let mut node_ids = Vec::new();
    for (i, text) in texts.iter().enumerate() {
        let mut node = map.new_node(&mut ids, 100.0 + 220.0 * i as f64, 100.0);
        node.text = text.to_string();
        node_ids.push(node.node_id.clone());
        Mutation::AddNode { node }.apply(&mut map)?;
    }

    for child in &node_ids[1..] {
        let edge = map.connect(&mut ids, &node_ids[0], child);
        Mutation::AddEdge { edge }.apply(&mut map)?;
    }

    Ok(map)
}
