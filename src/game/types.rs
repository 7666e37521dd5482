use serde::{Deserialize, Serialize};

/// A cell address on the room grid.
///
/// Callers pass `Option<Position>` where a location may be absent; `None`
/// takes the unaddressed fallback path in the grid module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}
