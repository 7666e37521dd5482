use serde::{Deserialize, Serialize};

use crate::engine::state::EngineState;
use crate::game::pieces::piece::{Piece, PieceInfo};

/// A described location placed on the room grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPiece {
    info: PieceInfo,
}

impl RoomPiece {
    pub fn new(name: &str, description: &str) -> Self {
        RoomPiece {
            info: PieceInfo::new(name, description),
        }
    }

    /// One-line description shown when the room is visited.
    pub fn describe(&self) -> String {
        format!("You are in {}. {}", self.info.name, self.info.description)
    }
}

impl Piece for RoomPiece {
    fn info(&self) -> &PieceInfo {
        &self.info
    }

    fn update(&mut self, _state: &mut EngineState) {
        println!("{}", self.describe());
    }
}
