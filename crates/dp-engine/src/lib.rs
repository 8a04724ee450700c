//! Story navigation engine for Dialogpoint.
//!
//! The [`Navigator`] walks a [`StoryGraph`](dp_core::StoryGraph): it offers
//! the jumps the player's inventory allows, charges and rewards on entry,
//! and can step back through recently entered points, undoing what entering
//! them did to the inventory. The [`Viewer`] wraps a navigator for
//! front-ends, including the state where no story could be loaded.

/// Engine and play configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// Change notifications for front-ends.
pub mod event;
/// Inventory-gated jump filtering.
pub mod filter;
/// The navigation state machine.
pub mod navigator;
/// Front-end facade and text commands.
pub mod viewer;

pub use config::{EngineConfig, PlayOptions};
pub use error::{EngineError, EngineResult};
pub use event::ViewEvent;
pub use filter::filter_available;
pub use navigator::Navigator;
pub use viewer::Viewer;
