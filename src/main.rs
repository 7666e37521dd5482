//! Main entry point for the demo game.
//!
//! Initializes logging, wires a `GameEngine` with a populated room grid and
//! an input map holding a quit command, and runs the loop.

use room_grid::config;
use room_grid::engine::GameEngine;
use room_grid::game::modules::{InputMapModule, MapGridModule};
use room_grid::game::pieces::{QuitCommand, RoomPiece};
use room_grid::game::types::Position;

fn main() {
    // Initialize logger from environment variable.
    env_logger::init();

    let mut engine = GameEngine::new();

    // Build the room grid and populate it.
    let mut map_module = MapGridModule::new(config::game::GRID_COLS, config::game::GRID_ROWS);
    map_module.add_room(
        RoomPiece::new("Lab 1", "A dark, spooky forest with tall trees."),
        Some(Position::new(0, 0)),
    );
    map_module.add_room(
        RoomPiece::new("Lab 2", "A calm river flows here."),
        Some(Position::new(1, 0)),
    );
    engine.add_module(map_module);

    // Create the input map and register commands.
    let mut input_module = InputMapModule::new();
    input_module.add_command(QuitCommand::new());
    engine.add_module(input_module);

    engine.run();
}
