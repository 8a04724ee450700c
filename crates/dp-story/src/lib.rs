//! Story documents, loading, and analysis for Dialogpoint.
//!
//! A story is described by a JSON document (see [`StoryDocument`]) holding
//! an optional header and an ordered list of dialog points. [`load_file`]
//! and [`load_str`] turn such a document into a [`Story`] whose graph is
//! ready for navigation; the build is all-or-nothing. [`builtin::scenario`]
//! provides a small fixed story that needs no file at all.

/// Dangling-jump and reachability analysis.
pub mod analysis;
/// The built-in five-point scenario.
pub mod builtin;
/// The JSON story document format.
pub mod document;
/// Error types for story loading.
pub mod error;
/// Loading documents into story graphs.
pub mod loader;

pub use analysis::{StoryReport, analyze};
pub use document::StoryDocument;
pub use error::{StoryError, StoryResult};
pub use loader::{Story, load_file, load_str};
