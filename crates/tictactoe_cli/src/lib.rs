//! Terminal host for the tic-tac-toe engine.
//!
//! - **Settings**: mode, difficulty and timing from TOML plus flags
//! - **Session**: one game with its opponent, restartable
//! - **Cli**: `play` and `hint` commands

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod session;
mod settings;

pub use session::{COMPUTER, GameSession, SessionError};
pub use settings::{ConfigError, GameMode, Settings};
