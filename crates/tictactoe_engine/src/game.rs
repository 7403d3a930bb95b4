//! Game state and the transitions between states.
//!
//! A [`GameState`] is a plain value. Every transition borrows the current
//! state and returns a new one, so a rejected move leaves the caller's state
//! exactly as it was and independent games never share anything.

use super::action::{Move, MoveError};
use super::invariants::{Invariant, InvariantSet, SingleWinnerInvariant, TicTacToeInvariants};
use super::rules::{Outcome, evaluate};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: board, side to move and derived phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StateSnapshot")]
pub struct GameState {
    board: Board,
    current_mover: Player,
    phase: Outcome,
}

/// Error building a state from an arbitrary board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidState {
    /// Both X and O hold a completed line.
    #[display("Both players hold a completed line")]
    BothPlayersWon,
}

impl GameState {
    /// Builds a snapshot from an arbitrary board and side to move.
    ///
    /// The phase is derived from the board. Boards on which both players
    /// hold a line are rejected since no game can reach them.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_parts(board: Board, current_mover: Player) -> Result<Self, InvalidState> {
        if !<SingleWinnerInvariant as Invariant<Board>>::holds(&board) {
            return Err(InvalidState::BothPlayersWon);
        }
        Ok(Self {
            board,
            current_mover,
            phase: evaluate(&board),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn current_mover(&self) -> Player {
        self.current_mover
    }

    /// Returns the game phase.
    pub fn phase(&self) -> &Outcome {
        &self.phase
    }

    /// Returns true while moves can still be made.
    pub fn is_in_progress(&self) -> bool {
        self.phase == Outcome::InProgress
    }

    #[cfg(test)]
    pub(crate) fn corrupted_for_tests(board: Board) -> Self {
        Self {
            board,
            current_mover: Player::X,
            phase: Outcome::InProgress,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        new_game()
    }
}

/// Serialized form of a state. The phase is recomputed on load.
#[derive(Deserialize)]
struct StateSnapshot {
    board: Board,
    current_mover: Player,
}

impl TryFrom<StateSnapshot> for GameState {
    type Error = InvalidState;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        GameState::from_parts(snapshot.board, snapshot.current_mover)
    }
}

/// Returns the initial state: empty board, X to move.
pub fn new_game() -> GameState {
    GameState {
        board: Board::new(),
        current_mover: Player::X,
        phase: Outcome::InProgress,
    }
}

/// All empty indices in ascending order, or none once the game is over.
pub fn legal_moves(state: &GameState) -> Vec<usize> {
    if !state.is_in_progress() {
        return Vec::new();
    }
    (0..9).filter(|&i| state.board.is_empty(i)).collect()
}

/// Places `player`'s mark at `index` and returns the resulting state.
///
/// # Errors
///
/// Checked in order: [`MoveError::OutOfRange`], [`MoveError::GameOver`],
/// [`MoveError::CellOccupied`], [`MoveError::WrongTurn`].
#[instrument(skip(state), fields(board = %state.board, to_move = %state.current_mover))]
pub fn apply_move(state: &GameState, index: usize, player: Player) -> Result<GameState, MoveError> {
    if index >= 9 {
        return Err(MoveError::OutOfRange(index));
    }
    if !state.is_in_progress() {
        return Err(MoveError::GameOver);
    }
    if !state.board.is_empty(index) {
        return Err(MoveError::CellOccupied(index));
    }
    if player != state.current_mover {
        return Err(MoveError::WrongTurn(player));
    }

    let mut board = state.board;
    board.place(index, player);
    let phase = evaluate(&board);
    let current_mover = if phase == Outcome::InProgress {
        player.opponent()
    } else {
        player
    };

    let next = GameState {
        board,
        current_mover,
        phase,
    };
    debug_assert!(TicTacToeInvariants::check_all(&next).is_ok());
    debug!(%phase, "Move applied");
    Ok(next)
}

/// Applies a [`Move`].
pub fn apply(state: &GameState, mov: Move) -> Result<GameState, MoveError> {
    apply_move(state, mov.index, mov.player)
}

/// Replays a sequence of moves from a new game.
pub fn replay(moves: &[Move]) -> Result<GameState, MoveError> {
    moves.iter().try_fold(new_game(), |state, mov| apply(&state, *mov))
}
