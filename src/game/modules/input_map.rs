//! Input mapping module.
//!
//! Reads one line from the console per tick, normalizes it, and dispatches
//! the command registered for that trigger. The read is blocking; this is
//! the engine's only suspension point.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use log::debug;

use crate::config::input::PROMPT;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::module::Module;
use crate::engine::state::EngineState;
use crate::game::pieces::command::Command;

pub struct InputMapModule {
    commands: HashMap<String, Box<dyn Command>>,
    reader: Box<dyn BufRead>,
}

impl InputMapModule {
    /// Input map reading from standard input.
    pub fn new() -> Self {
        Self::with_reader(Box::new(io::stdin().lock()))
    }

    /// Input map reading from an arbitrary line source. Lets tests drive
    /// the module with a cursor instead of the console.
    pub fn with_reader(reader: Box<dyn BufRead>) -> Self {
        InputMapModule {
            commands: HashMap::new(),
            reader,
        }
    }

    /// Register a command under its trigger. The last command registered
    /// for a trigger wins.
    pub fn add_command(&mut self, command: impl Command + 'static) {
        let trigger = command.trigger().to_string();
        self.commands.insert(trigger, Box::new(command));
    }

    /// Dispatch already-normalized input: exact lookup, no partial or
    /// fuzzy matching.
    pub fn process_command(&mut self, user_input: &str, state: &mut EngineState) {
        match self.commands.get_mut(user_input) {
            Some(command) => {
                debug!("dispatching command for trigger '{user_input}'");
                command.update(state);
            }
            None => println!("This command cannot be understood."),
        }
    }
}

impl Module for InputMapModule {
    fn execute(&mut self, state: &mut EngineState) -> EngineResult<()> {
        print!("{PROMPT}");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(EngineError::InputClosed);
        }

        let user_input = line.trim().to_lowercase();
        self.process_command(&user_input, state);
        Ok(())
    }
}

impl Default for InputMapModule {
    fn default() -> Self {
        Self::new()
    }
}
