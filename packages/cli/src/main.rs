mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, inspect, preview, types, ApplyArgs, InspectArgs, PreviewArgs};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Pagesmith CLI - compose pages from widgets and preview them
#[derive(Parser, Debug)]
#[command(name = "pagesmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output (overrides config, not RUST_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a composition as HTML at a viewport
    Preview(PreviewArgs),

    /// List the widgets of a composition
    Inspect(InspectArgs),

    /// Replay mutations against a composition and emit the result
    Apply(ApplyArgs),

    /// Show the widget types that can be added
    Types,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load(&cwd)?;

    init_tracing(&config, cli.verbose);

    match cli.command {
        Command::Preview(args) => preview(args, &config),
        Command::Inspect(args) => inspect(args),
        Command::Apply(args) => apply(args, &config),
        Command::Types => types(),
    }
}

fn init_tracing(config: &Config, verbose: bool) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}
