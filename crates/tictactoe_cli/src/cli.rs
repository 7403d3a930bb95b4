//! Command-line interface for the tic-tac-toe host.

use crate::settings::GameMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{Board, Difficulty, Player};

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a random or unbeatable opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// Two humans (pvp) or human against the computer (pve)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Opponent strength: random/easy or optimal/hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,

        /// Cosmetic delay before the computer moves, in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,

        /// Settings file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,
    },

    /// Evaluate a position and suggest the optimal move
    Hint {
        /// Nine cells, row-major: X, O and . or _ for empty
        board: Board,

        /// Side to move
        #[arg(long, default_value = "o")]
        to_move: Player,
    },
}
