//! A fixed five-point story for demos and tests.
//!
//! The points form a cycle: the first point is locked behind a `Flag` that
//! is only handed out at the last point, and costs 10 `Gold` to enter.

use dp_core::{DialogPoint, ItemMap, StoryGraph, StoryGraphBuilder};

use crate::loader::Story;

/// Name of the point where the built-in scenario starts.
pub const START: &str = "First point";

/// Build the built-in scenario graph.
pub fn graph() -> StoryGraph {
    let points = [
        DialogPoint::new("First point", "Your are in first point")
            .with_jump("Second point")
            .with_jump("Third point")
            .with_jump("Fourth point")
            .with_payment("Gold", 10)
            .with_key("Flag", 1),
        DialogPoint::new("Second point", "Your are in second point")
            .with_jump("First point")
            .with_jump("Third point")
            .with_jump("Fourth point"),
        DialogPoint::new("Third point", "Your are in third point")
            .with_jump("First point")
            .with_jump("Second point")
            .with_jump("Fourth point")
            .with_award("Gold", 10),
        DialogPoint::new("Fourth point", "Your are in fourth point")
            .with_jump("First point")
            .with_jump("Second point")
            .with_jump("Third point")
            .with_jump("Last point"),
        DialogPoint::new("Last point", "This is last Point! Return to first?")
            .with_jump("First point")
            .with_award("Flag", 1),
    ];

    let mut builder = StoryGraphBuilder::new();
    for point in points {
        // Every built-in point is named, so insertion cannot fail.
        let _ = builder.insert(point);
    }
    builder.build()
}

/// The built-in scenario as a complete story: starts at [`START`] with
/// 50 `Gold`.
pub fn scenario() -> Story {
    Story {
        title: Some("Built-in scenario".to_string()),
        start: Some(START.to_string()),
        inventory: Some(ItemMap::new().with("Gold", 50)),
        ..Story::from_graph(graph())
    }
}
