//! Engine error type.
//!
//! Every fallible engine path returns `EngineResult`; the tick loop is the
//! single place errors are caught and handled.

/// Core error type for the engine.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream reached end-of-file.
    #[error("input stream closed")]
    InputClosed,

    /// A module failed during its tick.
    #[error("module failure: {0}")]
    Module(String),
}

/// Result type used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
