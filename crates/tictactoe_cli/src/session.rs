//! One game as seen by the host: rules state plus mode and opponent.

use crate::settings::{GameMode, Settings};
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_engine::{
    Difficulty, GameState, MoveError, Outcome, Player, StrategyError, apply_move,
    choose_opponent_move, new_game,
};
use tracing::{debug, info, instrument};

/// The computer always plays O.
pub const COMPUTER: Player = Player::O;

/// Why a session action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The rules rejected the move.
    #[display("{}", _0)]
    Move(MoveError),
    /// The computer could not find a move.
    #[display("{}", _0)]
    Strategy(StrategyError),
    /// A human tried to move for the computer.
    #[display("It's the computer's turn")]
    NotHumanTurn,
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

impl From<StrategyError> for SessionError {
    fn from(err: StrategyError) -> Self {
        Self::Strategy(err)
    }
}

/// A running game with its mode and opponent.
#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    mode: GameMode,
    difficulty: Difficulty,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session from settings.
    #[instrument(skip(settings), fields(mode = %settings.mode(), difficulty = %settings.difficulty()))]
    pub fn new(settings: &Settings) -> Self {
        let rng = match settings.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            state: new_game(),
            mode: *settings.mode(),
            difficulty: *settings.difficulty(),
            rng,
        }
    }

    /// Current rules state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Opponent difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// True when the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::Pve
            && self.state.is_in_progress()
            && self.state.current_mover() == COMPUTER
    }

    /// Plays a human move for the side to move.
    ///
    /// The session state is untouched when the move is refused.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, index: usize) -> Result<(), SessionError> {
        if self.is_computer_turn() {
            return Err(SessionError::NotHumanTurn);
        }
        let player = self.state.current_mover();
        self.state = apply_move(&self.state, index, player)?;
        debug!(%player, index, "Human move");
        Ok(())
    }

    /// Lets the computer move; returns the index it played.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn play_opponent(&mut self) -> Result<usize, SessionError> {
        let index = choose_opponent_move(&self.state, self.difficulty, &mut self.rng)?;
        self.state = apply_move(&self.state, index, self.state.current_mover())?;
        info!(index, "Computer move");
        Ok(index)
    }

    /// Starts over, keeping mode and difficulty.
    pub fn restart(&mut self) {
        self.state = new_game();
    }

    /// One-line status for the player.
    pub fn status_message(&self) -> String {
        match self.state.phase() {
            Outcome::InProgress => format!("Player {} to move", self.state.current_mover()),
            Outcome::Win(winner) => format!("Player {} wins!", winner),
            Outcome::Draw => "Draw!".to_string(),
        }
    }
}
