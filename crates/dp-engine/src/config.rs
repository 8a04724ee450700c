//! Configuration for the navigation engine and for starting play.

use dp_core::{Inventory, ItemMap};
use dp_story::Story;

/// Point where play starts when neither the caller nor the story names one.
pub const DEFAULT_START: &str = "First";

/// Text shown at a point that offers no available jump.
pub const DEFAULT_TERMINAL_TEXT: &str = "GAME OVER!";

/// Tuning for a [`Navigator`](crate::Navigator).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of entered points remembered for stepping back.
    pub back_stack_depth: usize,
    /// Text displayed in place of the answer when no jump is available.
    pub terminal_text: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            back_stack_depth: 5,
            terminal_text: DEFAULT_TERMINAL_TEXT.to_string(),
        }
    }
}

impl EngineConfig {
    /// Set the back-stack depth (at least 1).
    pub fn with_back_stack_depth(mut self, depth: usize) -> Self {
        self.back_stack_depth = depth.max(1);
        self
    }

    /// Set the terminal text.
    pub fn with_terminal_text(mut self, text: impl Into<String>) -> Self {
        self.terminal_text = text.into();
        self
    }
}

/// How to start playing a story.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Start point, overriding the story header.
    pub start: Option<String>,
    /// Items added on top of the starting inventory.
    pub extra_items: ItemMap,
    /// Engine tuning.
    pub engine: EngineConfig,
}

impl PlayOptions {
    /// Override the start point.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Add items to the starting inventory.
    pub fn with_item(mut self, item: impl Into<String>, quantity: u32) -> Self {
        self.extra_items.add(item, quantity);
        self
    }

    /// Set the engine configuration.
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// The start point for `story`: these options, then the story header,
    /// then [`DEFAULT_START`].
    pub fn start_for(&self, story: &Story) -> String {
        self.start
            .clone()
            .or_else(|| story.start.clone())
            .unwrap_or_else(|| DEFAULT_START.to_string())
    }

    /// The starting inventory for `story`: the story header (50 `Gold` when
    /// the header has none) plus [`extra_items`](Self::extra_items).
    pub fn inventory_for(&self, story: &Story) -> Inventory {
        let base = story
            .inventory
            .clone()
            .unwrap_or_else(|| ItemMap::new().with("Gold", 50));
        let mut inventory = Inventory::from_items(base);
        inventory.add_all(&self.extra_items);
        inventory
    }
}
