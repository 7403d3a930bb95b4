//! Tic-tac-toe rules and opponent strategies.
//!
//! The engine is a set of pure functions over an explicit [`GameState`]
//! value. Hosts (terminal, browser, test harness) drive it one call at a time:
//!
//! ```
//! use tictactoe_engine::{Difficulty, Outcome, Player, apply_move, choose_opponent_move, new_game};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let state = apply_move(&new_game(), 4, Player::X)?;
//! let reply = choose_opponent_move(&state, Difficulty::Optimal, &mut rng)?;
//! let state = apply_move(&state, reply, Player::O)?;
//! assert_eq!(state.phase(), &Outcome::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod strategy;
mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use action::{Move, MoveError};
pub use game::{GameState, InvalidState, apply, apply_move, legal_moves, new_game, replay};
pub use position::Position;
pub use rules::{Outcome, WIN_LINES, WinLine, evaluate, winning_line};
pub use strategy::{
    Difficulty, MinimaxStrategy, RandomStrategy, Strategy, StrategyError, choose_opponent_move,
    find_best_move, score_moves,
};
pub use types::{Board, ParseBoardError, Player, Square};
