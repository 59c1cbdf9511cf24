use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use mindmap_compiler_markdown::split_sections;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SectionsArgs {
    /// Markdown file to split
    pub input: PathBuf,

    /// Print only the raw text of this section (0-based)
    #[arg(short, long)]
    pub index: Option<usize>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn sections(args: SectionsArgs, cwd: &str) -> Result<()> {
    let path = PathBuf::from(cwd).join(&args.input);
    let markdown = fs::read_to_string(&path)?;
    let sections = split_sections(&markdown);

    if let Some(index) = args.index {
        let section = sections.get(index).ok_or_else(|| {
            anyhow!(
                "Section {} does not exist ({} sections)",
                index,
                sections.len()
            )
        })?;
        print!("{}", section.text());
        return Ok(());
    }

    match args.format.as_str() {
        "json" => {
            let texts: Vec<String> = sections.iter().map(|s| s.text()).collect();
            println!("{}", serde_json::to_string_pretty(&texts)?);
        }
        "text" => {
            for (i, section) in sections.iter().enumerate() {
                let heading = section.heading().unwrap_or("(no heading)");
                println!(
                    "{} {} {}",
                    format!("[{}]", i).dimmed(),
                    heading.bright_white(),
                    format!("{} lines", section.body().len()).dimmed()
                );
            }
        }
        other => return Err(anyhow!("Unknown format: {}. Use: text or json", other)),
    }

    Ok(())
}
