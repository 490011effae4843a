//! Main entry point for the SC2 Clips Bot.

use anyhow::{Context, Result};
use clap::Parser;
use sc2clips_bot::{load_config, ClipsBot};
use sc2clips_common::init_logging;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, overriding the configured level
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();

    let config = load_config(args.config.as_deref(), args.log_level.as_deref())
        .context("Failed to load configuration")?;

    let _log_guard = init_logging(&config.logging).context("Failed to initialise logging")?;

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "Loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "Failed to read environment file"),
    }
    info!(version = env!("CARGO_PKG_VERSION"), "Configuration loaded");

    ClipsBot::new(config)
        .start()
        .await
        .context("Bot stopped with an error")?;

    Ok(())
}
