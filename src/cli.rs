//! Command-line interface for gridmarks.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gridmarks - square-board line games with persistent scores
#[derive(Parser, Debug)]
#[command(name = "gridmarks")]
#[command(about = "Play square-board line games and track scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Board side length (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// Path to the score record (overrides the config file)
        #[arg(long)]
        score_file: Option<PathBuf>,

        /// Path to the config file (defaults apply if it doesn't exist)
        #[arg(long, default_value = "gridmarks.toml")]
        config: PathBuf,
    },

    /// Show the persisted score table
    Stats {
        /// Path to the score record (overrides the config file)
        #[arg(long)]
        score_file: Option<PathBuf>,

        /// Path to the config file (defaults apply if it doesn't exist)
        #[arg(long, default_value = "gridmarks.toml")]
        config: PathBuf,
    },

    /// Reset the persisted score table to zero
    Reset {
        /// Path to the score record (overrides the config file)
        #[arg(long)]
        score_file: Option<PathBuf>,

        /// Path to the config file (defaults apply if it doesn't exist)
        #[arg(long, default_value = "gridmarks.toml")]
        config: PathBuf,
    },
}
