//! Timeline tic-tac-toe - terminal front end
//!
//! Plays a local two-player game; every position stays reachable from
//! the move list until a new move is played from an earlier one.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::fs::File;
use std::sync::Mutex;
use timeline_tictactoe::{GameConfig, GameEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_tracing(&config)?;

    info!(side = *config.side(), "Starting timeline tic-tac-toe");
    tui::run(GameEngine::from_config(&config))
}

/// Installs the subscriber; logs go to the configured file, else stderr.
fn init_tracing(config: &GameConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.log_file() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}
