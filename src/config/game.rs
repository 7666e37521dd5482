/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as the
/// dimensions of the room grid.
pub const GRID_ROWS: usize = 2; // Number of rows in the room grid.

/// Number of columns in the room grid.
pub const GRID_COLS: usize = 2;
