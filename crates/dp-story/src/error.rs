//! Error types for story loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while loading or writing a story.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The story file could not be read.
    #[error("cannot open story file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid story JSON.
    #[error("invalid story document: {0}")]
    Json(#[from] serde_json::Error),

    /// A point could not be added to the graph.
    #[error("invalid point: {0}")]
    Point(#[from] dp_core::CoreError),

    /// The document parsed but contains no points.
    #[error("story contains no points")]
    NoPoints,

    /// The header names a start point that is not defined.
    #[error("start point not found: \"{0}\"")]
    UnknownStart(String),
}
