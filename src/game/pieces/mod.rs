//! Game pieces module.
//!
//! This module organizes the named game entities: rooms, the player, and
//! the commands matched against console input.

pub mod command;
pub mod piece;
pub mod player;
pub mod room;

pub use command::*;
pub use piece::*;
pub use player::*;
pub use room::*;
