//! Command-line interface for the terminal game.

use clap::Parser;
use std::path::PathBuf;
use timeline_tictactoe::{ConfigError, GameConfig};
use tracing::instrument;

/// Tic-tac-toe with a navigable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal and jump back to any move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length (overrides the config file)
    #[arg(short, long)]
    pub side: Option<usize>,
}

impl Cli {
    /// Resolves the effective configuration: file (or defaults), then flags.
    #[instrument(skip(self))]
    pub fn load_config(&self) -> Result<GameConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        match self.side {
            Some(side) => config.with_side(side),
            None => Ok(config),
        }
    }
}
