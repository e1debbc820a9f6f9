//! Command-line interface for strictly_solo.

use clap::{Parser, Subcommand};
use strictly_solo::{FirstMover, Strategy};

/// Strictly Solo - tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "solo")]
#[command(about = "Play tic-tac-toe against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to game configuration file
        #[arg(short, long, default_value = "strictly_solo.toml")]
        config: std::path::PathBuf,

        /// Opponent strategy (overrides config)
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// Who opens each game: human, opponent or random (overrides config)
        #[arg(short, long)]
        first: Option<FirstMover>,

        /// Reset automatically this many milliseconds after a game ends
        #[arg(long)]
        auto_reset_ms: Option<u64>,

        /// Seed for random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the opponent's move for a board
    Suggest {
        /// Nine squares of X, O and - in row-major order, e.g. "OO-XX----"
        board: String,

        /// Opponent strategy
        #[arg(short, long, default_value = "minimax")]
        strategy: Strategy,

        /// Seed for strategies that play randomly
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}
