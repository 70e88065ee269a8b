mod app;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::{AppConfig, DEFAULT_CONFIG_PATH};

#[derive(Debug, Parser)]
#[command(name = "things-server", version, about = "Ninety-Seven Things API server")]
struct Cli {
    /// YAML configuration file; skipped when absent.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Serve the API (default).
    Run,
    /// Validate configuration and route bindings, then exit.
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = AppConfig::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    logging::init(&cfg.logging)?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => app::serve(&cfg).await,
        Command::Check => app::check(&cfg),
    }
}
