//! Moves and the errors produced when a move is rejected.

use super::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Board index (0-8) where the mark goes.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// Error returned when a move is rejected.
///
/// Rejection never modifies the state the move was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(#[error(not(source))] Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}
