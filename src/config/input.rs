/// Input configuration constants.
///
/// This module defines the console prompt shown before each read.
pub const PROMPT: &str = ">: ";
