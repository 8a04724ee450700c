/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or querying a story graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A point name was looked up but is not part of the graph.
    #[error("point not found: \"{0}\"")]
    PointNotFound(String),

    /// A point was inserted without a name.
    #[error("point has an empty name (answer: \"{answer}\")")]
    EmptyName {
        /// The answer text of the offending point, to help locate it.
        answer: String,
    },
}
