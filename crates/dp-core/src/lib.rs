//! Core types for Dialogpoint: inventory, dialog points, and the story graph.
//!
//! This crate defines the data model the navigation engine runs on. It is
//! independent of any story file format: you can build a [`StoryGraph`]
//! programmatically through [`StoryGraphBuilder`] or let a loader feed it
//! deserialized [`DialogPoint`]s.

/// Error types used throughout the crate.
pub mod error;
/// The player's item store.
pub mod inventory;
/// Item name to quantity maps.
pub mod items;
/// Dialog points, the nodes of a story.
pub mod point;
/// The read-only story graph and its builder.
pub mod story;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export inventory types.
pub use inventory::{Inventory, Shortfall};
/// Re-export item maps.
pub use items::ItemMap;
/// Re-export dialog point.
pub use point::DialogPoint;
/// Re-export story graph types.
pub use story::{StoryGraph, StoryGraphBuilder};
