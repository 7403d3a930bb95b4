//! Single winner invariant: at most one player holds a completed line.

use super::super::rules::has_line;
use super::super::{Board, GameState, Player};
use super::Invariant;

/// Invariant: X and O never both complete a line.
///
/// One move changes one square, and the game stops at the first completed
/// line, so no legal sequence reaches a board with two winners.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(has_line(board, Player::X) && has_line(board, Player::O))
    }

    fn description() -> &'static str {
        "At most one player holds a completed line"
    }
}

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        <Self as Invariant<Board>>::holds(state.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_winner_holds() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert!(<SingleWinnerInvariant as Invariant<Board>>::holds(&board));
    }

    #[test]
    fn test_two_winners_violates() {
        let board: Board = "XXXOOO...".parse().unwrap();
        assert!(!<SingleWinnerInvariant as Invariant<Board>>::holds(&board));
    }
}
