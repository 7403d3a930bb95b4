//! Exhaustive minimax opponent.
//!
//! The whole remaining tree is searched; tic-tac-toe is small enough that no
//! depth limit, pruning or transposition table is needed.
//!
//! Scores are from the searching side's point of view: `+10` for a leaf it
//! has won, `-10` for a leaf the other side has won, `0` for a draw. Depth
//! does not affect the score, so among equally scored moves the lowest index
//! wins.

use super::{Strategy, StrategyError};
use crate::rules::check_winner;
use crate::{Board, GameState, Player, legal_moves};
use rand::RngCore;
use tracing::{debug, instrument};

const WIN_SCORE: i32 = 10;

/// Always plays a move with the best minimax score.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn choose_move(&self, state: &GameState, _rng: &mut dyn RngCore) -> Result<usize, StrategyError> {
        find_best_move(state)
    }
}

/// Minimax score of every legal move for the side to move, in index order.
///
/// Empty once the game is over.
#[instrument(skip(state), fields(board = %state.board(), to_move = %state.current_mover()))]
pub fn score_moves(state: &GameState) -> Vec<(usize, i32)> {
    let me = state.current_mover();
    let mut board = *state.board();
    legal_moves(state)
        .into_iter()
        .map(|index| {
            board.place(index, me);
            let score = minimax(&mut board, me, me.opponent());
            board.clear(index);
            (index, score)
        })
        .collect()
}

/// Returns the first index, scanning 0-8, with the best score for the side
/// to move.
///
/// # Errors
///
/// Returns [`StrategyError::NoLegalMoves`] when the game is over.
pub fn find_best_move(state: &GameState) -> Result<usize, StrategyError> {
    let mut best: Option<(usize, i32)> = None;
    for (index, score) in score_moves(state) {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    let (index, score) = best.ok_or(StrategyError::NoLegalMoves)?;
    debug!(index, score, "Best move found");
    Ok(index)
}

/// Value of `board` for `me` with `to_move` about to play.
///
/// Marks are placed and removed in place; `board` is unchanged on return.
fn minimax(board: &mut Board, me: Player, to_move: Player) -> i32 {
    if let Some(winner) = check_winner(board) {
        return if winner == me { WIN_SCORE } else { -WIN_SCORE };
    }
    if board.is_full() {
        return 0;
    }

    let maximizing = to_move == me;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for index in 0..9 {
        if !board.is_empty(index) {
            continue;
        }
        board.place(index, to_move);
        let score = minimax(board, me, to_move.opponent());
        board.clear(index);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
