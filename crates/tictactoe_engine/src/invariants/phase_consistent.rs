//! Phase consistency invariant: the stored phase equals the board's evaluation.

use super::super::rules::evaluate;
use super::super::GameState;
use super::Invariant;

/// Invariant: a state's phase is exactly `evaluate(board)`.
pub struct PhaseConsistentInvariant;

impl Invariant<GameState> for PhaseConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        *state.phase() == evaluate(state.board())
    }

    fn description() -> &'static str {
        "Phase matches the evaluation of the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::new_game;

    #[test]
    fn test_new_game_holds() {
        assert!(PhaseConsistentInvariant::holds(&new_game()));
    }

    #[test]
    fn test_stale_phase_violates() {
        let stale = GameState::corrupted_for_tests("XXX.OO...".parse().unwrap());
        assert!(!PhaseConsistentInvariant::holds(&stale));
    }
}
