/// Main configuration module.
///
/// Re-exports submodules for game and input configuration.
pub mod game;
pub mod input;
