//! The navigation state machine.
//!
//! The navigator is always displaying one point, together with the jumps
//! the current inventory allows from it. Selecting a jump enters the target
//! point: its award is added, its payment deducted, and its name pushed on a
//! bounded back-stack. Stepping back pops that name and undoes the same
//! inventory changes.
//!
//! Entry effects for a point are a pure function of the point itself, so
//! they are always reapplied or reversed identically regardless of
//! navigation history. That is why the back-stack stores names only and no
//! inventory snapshots.

use std::collections::VecDeque;

use dp_core::{DialogPoint, Inventory, StoryGraph};
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::event::ViewEvent;
use crate::filter::filter_available;

/// Walks a story graph on behalf of the player.
#[derive(Debug)]
pub struct Navigator {
    graph: StoryGraph,
    inventory: Inventory,
    config: EngineConfig,
    current: String,
    answer: String,
    available: Vec<String>,
    back_stack: VecDeque<String>,
    events: Vec<ViewEvent>,
}

impl Navigator {
    /// Create a navigator displaying `start`.
    ///
    /// Fails if `start` is not a point of `graph`.
    pub fn start(
        graph: StoryGraph,
        inventory: Inventory,
        start: &str,
        config: EngineConfig,
    ) -> EngineResult<Self> {
        let mut navigator = Self {
            graph,
            inventory,
            config,
            current: String::new(),
            answer: String::new(),
            available: Vec::new(),
            back_stack: VecDeque::new(),
            events: Vec::new(),
        };
        navigator.jump_to(start)?;
        navigator
            .events
            .push(ViewEvent::InventoryChanged(navigator.inventory.items().clone()));
        Ok(navigator)
    }

    /// Display the named point without touching the inventory.
    ///
    /// Recomputes the available jumps. When none are available the
    /// configured terminal text is shown instead of the point's answer.
    pub fn jump_to(&mut self, name: &str) -> EngineResult<()> {
        let point = self.graph.point(name)?;
        let available = filter_available(point.jumps(), &self.graph, &self.inventory);
        let answer = if available.is_empty() {
            self.config.terminal_text.clone()
        } else {
            point.answer().to_string()
        };

        debug!(point = name, available = available.len(), "jumped");
        self.current = name.to_string();
        self.available = available;
        self.answer = answer;
        self.events.push(ViewEvent::JumpsChanged(self.available.clone()));
        self.events.push(ViewEvent::AnswerChanged(self.answer.clone()));
        Ok(())
    }

    /// Enter the available jump at `index` (zero-based).
    ///
    /// An out-of-range index is rejected without any state change.
    pub fn select_jump(&mut self, index: usize) -> EngineResult<()> {
        let target = self
            .available
            .get(index)
            .cloned()
            .ok_or(EngineError::InvalidSelection {
                index,
                available: self.available.len(),
            })?;

        let point = self.graph.point(&target)?;
        apply_entry(&mut self.inventory, point);
        self.events
            .push(ViewEvent::InventoryChanged(self.inventory.items().clone()));

        self.jump_to(&target)?;

        self.back_stack.push_front(target);
        self.back_stack.truncate(self.config.back_stack_depth);
        Ok(())
    }

    /// Step back: undo the most recent entry and display that point again.
    ///
    /// Returns `false` and does nothing when the back-stack is empty.
    pub fn jump_back(&mut self) -> EngineResult<bool> {
        let Some(name) = self.back_stack.front().cloned() else {
            return Ok(false);
        };

        let point = self.graph.point(&name)?;
        reverse_entry(&mut self.inventory, point);
        self.back_stack.pop_front();
        self.events
            .push(ViewEvent::InventoryChanged(self.inventory.items().clone()));

        self.jump_to(&name)?;
        Ok(true)
    }

    /// Name of the point being displayed.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The point being displayed.
    pub fn current_point(&self) -> Option<&DialogPoint> {
        self.graph.get(&self.current)
    }

    /// Displayed text: the current point's answer, or the terminal text.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Jumps the player can select, in the point's order.
    pub fn available_jumps(&self) -> &[String] {
        &self.available
    }

    /// True when no jump is available from the current point.
    pub fn is_terminal(&self) -> bool {
        self.available.is_empty()
    }

    /// The player's inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Recently entered points, most recent first.
    pub fn back_stack(&self) -> impl Iterator<Item = &str> {
        self.back_stack.iter().map(String::as_str)
    }

    /// Number of entries on the back-stack.
    pub fn back_stack_len(&self) -> usize {
        self.back_stack.len()
    }

    /// The story graph being navigated.
    pub fn graph(&self) -> &StoryGraph {
        &self.graph
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Take all queued change notifications.
    pub fn drain_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }
}

fn apply_entry(inventory: &mut Inventory, point: &DialogPoint) {
    inventory.add_all(point.entry_award());
    inventory.drop_all(point.entry_payment());
}

fn reverse_entry(inventory: &mut Inventory, point: &DialogPoint) {
    inventory.drop_all(point.entry_award());
    inventory.add_all(point.entry_payment());
}
