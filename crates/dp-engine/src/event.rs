//! Change notifications for front-ends.

use dp_core::ItemMap;

/// Something the front-end should redraw.
///
/// The navigator queues events as its observable state changes; front-ends
/// collect them with [`Navigator::drain_events`](crate::Navigator::drain_events).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The displayed text changed.
    AnswerChanged(String),
    /// The list of selectable jumps changed.
    JumpsChanged(Vec<String>),
    /// Inventory contents changed; carries the new contents.
    InventoryChanged(ItemMap),
}
