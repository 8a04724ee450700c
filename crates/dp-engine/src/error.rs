//! Error types for the engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while navigating a story.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The selected index is not in the list of available jumps.
    #[error("invalid selection {index}: {available} jump(s) available")]
    InvalidSelection {
        /// Zero-based index that was selected.
        index: usize,
        /// Number of jumps on offer.
        available: usize,
    },

    /// No story is loaded, so there is nothing to navigate.
    #[error("no story loaded: {0}")]
    NoContent(String),

    /// Text input that is not a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Story graph error.
    #[error(transparent)]
    Core(#[from] dp_core::CoreError),
}
