mod commands;
mod config;
mod watcher;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    export, html, init, outline, sections, ExportArgs, HtmlArgs, InitArgs, OutlineArgs,
    SectionsArgs,
};
use tracing_subscriber::EnvFilter;

/// Mindmap CLI - export node-and-edge mindmaps as numbered Markdown
#[derive(Parser, Debug)]
#[command(name = "mindmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a config file and an example mindmap
    Init(InitArgs),

    /// Export mindmap documents to Markdown
    Export(ExportArgs),

    /// Print the numbered outline of a mindmap
    Outline(OutlineArgs),

    /// Split exported Markdown into copyable sections
    Sections(SectionsArgs),

    /// Render Markdown (or a mindmap) to HTML
    Html(HtmlArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Export(args) => export(args, &cwd),
        Command::Outline(args) => outline(args, &cwd),
        Command::Sections(args) => sections(args, &cwd),
        Command::Html(args) => html(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
