//! Console commands.
//!
//! A command is a piece with a trigger word; its `update` is the command's
//! effect. Dispatch happens in the input map module by exact lookup of the
//! normalized input, so `matches` documents the matching rule rather than
//! sitting on the dispatch path.

use serde::{Deserialize, Serialize};

use crate::engine::state::EngineState;
use crate::game::pieces::piece::{Piece, PieceInfo};

/// A piece matched against user input by a trigger word.
pub trait Command: Piece {
    /// The exact string this command matches after normalization.
    fn trigger(&self) -> &str;

    /// Whether raw user input matches this command's trigger.
    fn matches(&self, input: &str) -> bool {
        input.trim().to_lowercase() == self.trigger()
    }
}

/// Stops the game loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuitCommand {
    info: PieceInfo,
    trigger: String,
}

impl QuitCommand {
    pub fn new() -> Self {
        QuitCommand {
            info: PieceInfo::new("Quit", "Exits the game."),
            trigger: "quit".to_string(),
        }
    }
}

impl Piece for QuitCommand {
    fn info(&self) -> &PieceInfo {
        &self.info
    }

    fn update(&mut self, state: &mut EngineState) {
        println!("Thank you for playing!");
        state.stop();
    }
}

impl Command for QuitCommand {
    fn trigger(&self) -> &str {
        &self.trigger
    }
}

impl Default for QuitCommand {
    fn default() -> Self {
        Self::new()
    }
}
