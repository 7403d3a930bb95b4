//! WASM bindings for the browser front end.
//!
//! The page owns rendering and input; it calls these methods for every state
//! change and reads the result back.

use crate::{
    Difficulty, GameState, Outcome, Player, Square, apply_move, choose_opponent_move, legal_moves,
    new_game, winning_line,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

/// WASM-friendly wrapper around one game.
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a new game
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame { inner: new_game() }
    }

    /// Replace the game with a fresh one
    pub fn restart(&mut self) {
        self.inner = new_game();
    }

    /// Cells as 0 (empty), 1 (X) or 2 (O), row-major
    pub fn cells(&self) -> Vec<u8> {
        self.inner
            .board()
            .squares()
            .iter()
            .map(|sq| match sq {
                Square::Empty => 0,
                Square::Occupied(Player::X) => 1,
                Square::Occupied(Player::O) => 2,
            })
            .collect()
    }

    /// Player to move: "X" or "O"
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> String {
        self.inner.current_mover().to_string()
    }

    /// Game status: "in_progress", "x_wins", "o_wins" or "draw"
    pub fn status(&self) -> String {
        match self.inner.phase() {
            Outcome::InProgress => "in_progress",
            Outcome::Win(Player::X) => "x_wins",
            Outcome::Win(Player::O) => "o_wins",
            Outcome::Draw => "draw",
        }
        .to_string()
    }

    /// Indices of the completed line, empty if there is none
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self) -> Vec<u8> {
        winning_line(self.inner.board())
            .map(|line| line.iter().map(|&i| i as u8).collect())
            .unwrap_or_default()
    }

    /// Empty cell indices, empty once the game is over
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Vec<u8> {
        legal_moves(&self.inner).into_iter().map(|i| i as u8).collect()
    }

    /// Play the current player's mark at `index`
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, index: usize) -> Result<(), JsError> {
        let player = self.inner.current_mover();
        self.inner = apply_move(&self.inner, index, player).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(())
    }

    /// Pick and play the opponent's move; returns the chosen index.
    ///
    /// `difficulty` is "random"/"easy" or "optimal"/"hard". The seed drives
    /// the random opponent so the page decides where randomness comes from.
    #[wasm_bindgen(js_name = opponentMove)]
    pub fn opponent_move(&mut self, difficulty: &str, seed: u64) -> Result<usize, JsError> {
        let difficulty: Difficulty = difficulty
            .parse()
            .map_err(|_| JsError::new(&format!("unknown difficulty {difficulty:?}")))?;
        let mut rng = StdRng::seed_from_u64(seed);
        let index = choose_opponent_move(&self.inner, difficulty, &mut rng)
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.apply_move(index)?;
        Ok(index)
    }

    /// Full state as a plain JS object
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsError::new(&e.to_string()))
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
