//! Gridmarks - Unified CLI
//!
//! Play square-board line games in the terminal and track scores.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use gridmarks::{GameConfig, ScoreStore};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            size,
            score_file,
            config,
        } => {
            let (config, store) = load(config, size, score_file)?;
            info!(board_size = config.board_size(), "Starting play session");
            gridmarks::run_game(&config, &store)
        }
        Command::Stats { score_file, config } => {
            let (_, store) = load(config, None, score_file)?;
            gridmarks::show_stats(&store)
        }
        Command::Reset { score_file, config } => {
            let (_, store) = load(config, None, score_file)?;
            gridmarks::reset_stats(&store)
        }
    }
}

/// Loads the config file (defaults when absent), applies CLI overrides,
/// and builds the score store.
fn load(
    config_path: PathBuf,
    size: Option<usize>,
    score_file: Option<PathBuf>,
) -> Result<(GameConfig, ScoreStore)> {
    let mut config = GameConfig::from_file_or_default(&config_path)?;
    if let Some(size) = size {
        config = config.with_board_size(size);
    }
    if let Some(path) = score_file {
        config = config.with_score_path(path);
    }
    config.validate()?;

    debug!(?config, "Effective configuration");
    let store = ScoreStore::new(config.score_path());
    Ok((config, store))
}
