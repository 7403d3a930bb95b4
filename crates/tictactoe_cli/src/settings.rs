//! Host settings: game mode, opponent difficulty and timing.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Difficulty;
use tracing::{debug, info, instrument};

/// Who plays O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the keyboard.
    Pvp,
    /// The human plays X against the computer.
    #[default]
    Pve,
}

/// User-configurable settings for a session.
///
/// Loaded from TOML; every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Two-player or single-player.
    #[serde(default)]
    mode: GameMode,

    /// Opponent strength in single-player mode.
    #[serde(default)]
    difficulty: Difficulty,

    /// Cosmetic delay before the computer moves.
    #[serde(default = "default_think_ms")]
    think_ms: u64,

    /// Seed for the random opponent; drawn from the OS when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_think_ms() -> u64 {
    500
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            think_ms: default_think_ms(),
            seed: None,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(mode = %settings.mode, difficulty = %settings.difficulty, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides; `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        difficulty: Option<Difficulty>,
        seed: Option<u64>,
        think_ms: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(think_ms) = think_ms {
            self.think_ms = think_ms;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
