//! Uniformly random opponent.

use super::{Strategy, StrategyError};
use crate::{GameState, legal_moves};
use rand::{Rng, RngCore};
use tracing::debug;

/// Picks uniformly among the legal moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose_move(&self, state: &GameState, rng: &mut dyn RngCore) -> Result<usize, StrategyError> {
        let moves = legal_moves(state);
        if moves.is_empty() {
            return Err(StrategyError::NoLegalMoves);
        }
        let index = moves[rng.random_range(0..moves.len())];
        debug!(index, choices = moves.len(), "Random move chosen");
        Ok(index)
    }
}
