//! Opponent strategies.
//!
//! A strategy picks one legal index for the side to move. Hosts select a
//! strategy through [`Difficulty`] and call [`choose_opponent_move`].

mod minimax;
mod random;

pub use minimax::{MinimaxStrategy, find_best_move, score_moves};
pub use random::RandomStrategy;

use super::GameState;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error returned when a strategy cannot pick a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StrategyError {
    /// The board is full or the game is already decided.
    #[display("No legal moves available")]
    NoLegalMoves,
}

/// Chooses a move for the side to move.
pub trait Strategy {
    /// Returns a legal board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::NoLegalMoves`] when the game is over.
    fn choose_move(&self, state: &GameState, rng: &mut dyn RngCore) -> Result<usize, StrategyError>;
}

/// Opponent difficulty.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    #[default]
    #[serde(alias = "easy")]
    #[strum(to_string = "random", serialize = "easy")]
    Random,
    /// Exhaustive minimax; never loses.
    #[serde(alias = "hard")]
    #[strum(to_string = "optimal", serialize = "hard")]
    Optimal,
}

impl Difficulty {
    /// Returns the strategy implementing this difficulty.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Difficulty::Random => &RandomStrategy,
            Difficulty::Optimal => &MinimaxStrategy,
        }
    }
}

/// Picks the opponent's move for `state` at the given difficulty.
///
/// `rng` is only consulted by [`Difficulty::Random`].
#[instrument(skip(state, rng), fields(board = %state.board(), to_move = %state.current_mover()))]
pub fn choose_opponent_move(
    state: &GameState,
    difficulty: Difficulty,
    rng: &mut dyn RngCore,
) -> Result<usize, StrategyError> {
    difficulty.strategy().choose_move(state, rng)
}
