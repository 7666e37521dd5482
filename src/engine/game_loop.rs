//! Main game loop.
//!
//! The engine owns an ordered list of modules and polls each of them once
//! per tick until something clears the running flag.

use log::{debug, error, info};

use crate::engine::error::{EngineError, EngineResult};
use crate::engine::module::Module;
use crate::engine::state::EngineState;

pub struct GameEngine {
    modules: Vec<Box<dyn Module>>,
    state: EngineState,
}

impl GameEngine {
    pub fn new() -> Self {
        GameEngine {
            modules: Vec::new(),
            state: EngineState::new(),
        }
    }

    /// Register a module. Registration order is execution order; there is
    /// no removal.
    pub fn add_module(&mut self, module: impl Module + 'static) {
        self.modules.push(Box::new(module));
        debug!("module registered ({} total)", self.modules.len());
    }

    /// Run one tick: every module in registration order. The first error
    /// aborts the remaining modules for this tick.
    pub fn update_modules(&mut self) -> EngineResult<()> {
        for module in self.modules.iter_mut() {
            module.execute(&mut self.state)?;
        }
        self.state.advance_tick();
        Ok(())
    }

    /// The engine's only recovery policy: log the failure and stop.
    fn handle_error(&mut self, err: &EngineError) {
        error!("An error occurred: {err}");
        self.state.stop();
    }

    /// Main game loop. Returns once the running flag clears.
    pub fn run(&mut self) {
        info!("engine starting with {} module(s)", self.modules.len());
        println!("Game starting. Type 'quit' to exit.");

        while self.state.is_running() {
            // Fresh error boundary every iteration; the handler stops the
            // loop, so any tick-time fault is fatal.
            if let Err(err) = self.update_modules() {
                self.handle_error(&err);
            }
        }

        info!("engine stopped after {} tick(s)", self.state.ticks());
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
