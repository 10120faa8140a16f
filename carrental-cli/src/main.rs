//! carrental interactive desk

use anyhow::Context;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use clap::Parser;

use carrental_cli::{AppConfig, Cli, Terminal};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from(Cli::parse());

    // Logs go to stderr so they never interleave with prompts
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Starting carrental");

    let manager = config
        .build_manager()
        .context("Failed to load fleet")?;

    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout().lock(), manager);
    terminal.run().context("Terminal session failed")?;

    info!("Session ended");
    Ok(())
}
