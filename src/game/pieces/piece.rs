use serde::{Deserialize, Serialize};

use crate::engine::state::EngineState;

/// The name/description pair every piece carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceInfo {
    pub name: String,
    pub description: String,
}

impl PieceInfo {
    pub fn new(name: &str, description: &str) -> Self {
        PieceInfo {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// A named, described game entity with its own per-update behavior.
pub trait Piece {
    fn info(&self) -> &PieceInfo;

    fn name(&self) -> &str {
        &self.info().name
    }

    fn description(&self) -> &str {
        &self.info().description
    }

    /// Update this piece's state.
    fn update(&mut self, state: &mut EngineState);
}
