//! Engine modules shipped with the game.

pub mod input_map;
pub mod map_grid;

pub use input_map::*;
pub use map_grid::*;
