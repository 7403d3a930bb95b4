//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from state
//! storage so the search can call them on scratch boards.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WIN_LINES, WinLine, check_winner, has_line, winning_line};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty square.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true once the game can no longer continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board. A completed line wins even when the board is full.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
