//! Player piece.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::state::EngineState;
use crate::game::pieces::piece::{Piece, PieceInfo};

/// The main character of the game.
///
/// Carries an open-ended data map so game-specific attributes (score,
/// inventory keys, flags) can be attached without changing the type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerPiece {
    info: PieceInfo,
    data: HashMap<String, String>,
}

impl PlayerPiece {
    pub fn new() -> Self {
        PlayerPiece {
            info: PieceInfo::new("Player", "The main character of the game."),
            data: HashMap::new(),
        }
    }

    pub fn set_data(&mut self, key: &str, value: &str) {
        self.data.insert(key.to_string(), value.to_string());
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

impl Piece for PlayerPiece {
    fn info(&self) -> &PieceInfo {
        &self.info
    }

    fn update(&mut self, _state: &mut EngineState) {
        println!("{} is ready for action.", self.name());
    }
}

impl Default for PlayerPiece {
    fn default() -> Self {
        Self::new()
    }
}
