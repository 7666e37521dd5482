//! Room grid module.
//!
//! A fixed-size 2D grid of optional rooms. Dimensions are set at
//! construction; there is no resize. Renders itself as one text line per
//! row on every tick.

use log::warn;

use crate::engine::error::EngineResult;
use crate::engine::module::Module;
use crate::engine::state::EngineState;
use crate::game::pieces::piece::Piece;
use crate::game::pieces::room::RoomPiece;
use crate::game::types::Position;

pub struct MapGridModule {
    size_x: usize,
    size_y: usize,
    grid: Vec<Vec<Option<RoomPiece>>>,
}

impl MapGridModule {
    pub fn new(size_x: usize, size_y: usize) -> Self {
        MapGridModule {
            size_x,
            size_y,
            grid: vec![vec![None; size_x]; size_y],
        }
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.size_x && pos.y < self.size_y
    }

    /// Place the room at the first empty cell, scanning rows top to
    /// bottom and cells left to right. Returns false when the grid is full.
    pub fn add_to_first_empty_space(&mut self, room: RoomPiece) -> bool {
        for y in 0..self.size_y {
            for x in 0..self.size_x {
                if self.grid[y][x].is_none() {
                    self.grid[y][x] = Some(room);
                    return true;
                }
            }
        }
        false
    }

    /// Place a room at the given location, or at the first empty cell when
    /// the location is absent or outside the grid. An occupied target cell
    /// is reported and left alone; it is not an error.
    pub fn add_room(&mut self, room: RoomPiece, location: Option<Position>) {
        match location {
            Some(pos) if self.in_bounds(pos) => {
                if self.grid[pos.y][pos.x].is_none() {
                    println!("Room '{}' added at ({}, {}).", room.name(), pos.x, pos.y);
                    self.grid[pos.y][pos.x] = Some(room);
                } else {
                    println!("Location ({}, {}) is already occupied.", pos.x, pos.y);
                }
            }
            _ => {
                if let Some(pos) = location {
                    warn!(
                        "location ({}, {}) is outside the {}x{} grid, using first empty cell",
                        pos.x, pos.y, self.size_x, self.size_y
                    );
                }
                if !self.add_to_first_empty_space(room) {
                    println!(
                        "Currently there isn't any room available inside your grid. \
                         Please resize the grid to add more room."
                    );
                }
            }
        }
    }

    /// Clear the cell at the given location. Absent, out-of-range, or
    /// already-empty locations are a silent no-op.
    pub fn remove_room(&mut self, location: Option<Position>) {
        if let Some(pos) = location {
            if self.in_bounds(pos) {
                if let Some(room) = self.grid[pos.y][pos.x].take() {
                    println!("Room '{}' removed.", room.name());
                }
            }
        }
    }

    pub fn room_at(&self, pos: Position) -> Option<&RoomPiece> {
        if self.in_bounds(pos) {
            self.grid[pos.y][pos.x].as_ref()
        } else {
            None
        }
    }

    /// One string per row, each cell the room's name or "Empty".
    pub fn render_rows(&self) -> Vec<String> {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_ref().map_or("Empty", |room| room.name()))
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect()
    }
}

impl Module for MapGridModule {
    fn execute(&mut self, _state: &mut EngineState) -> EngineResult<()> {
        println!("Map Grid:");
        for row in self.render_rows() {
            println!("{row}");
        }
        Ok(())
    }
}
