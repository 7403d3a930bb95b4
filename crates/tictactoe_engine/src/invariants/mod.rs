//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every state the
//! rules hand out. Snapshots built from arbitrary boards are checked
//! against them before they are accepted.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod phase_consistent;
pub mod single_winner;

pub use phase_consistent::PhaseConsistentInvariant;
pub use single_winner::SingleWinnerInvariant;

/// All state invariants as a composable set.
pub type TicTacToeInvariants = (SingleWinnerInvariant, PhaseConsistentInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Player, apply_move, new_game};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(TicTacToeInvariants::check_all(&new_game()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut state = new_game();
        for (index, player) in [(0, Player::X), (4, Player::O), (2, Player::X)] {
            state = apply_move(&state, index, player).unwrap();
            assert!(TicTacToeInvariants::check_all(&state).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let corrupted = GameState::corrupted_for_tests("XXXOOO...".parse().unwrap());
        let violations = TicTacToeInvariants::check_all(&corrupted).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            <SingleWinnerInvariant as Invariant<GameState>>::description()
        );
    }
}
