//! Inventory-gated jump filtering.

use dp_core::{Inventory, StoryGraph};
use tracing::warn;

/// Return the candidates the player can currently jump to.
///
/// A candidate is available when the inventory covers both its entry
/// payment and its entry keys; nothing is deducted here. Candidates missing
/// from the graph are logged and skipped. The result keeps candidate order.
pub fn filter_available(
    candidates: &[String],
    graph: &StoryGraph,
    inventory: &Inventory,
) -> Vec<String> {
    candidates
        .iter()
        .filter(|name| {
            let Some(point) = graph.get(name) else {
                warn!(target_point = %name, "jump to undefined point skipped");
                return false;
            };
            inventory.holds(point.entry_payment()) && inventory.holds(point.entry_keys())
        })
        .cloned()
        .collect()
}
