//! Structural checks over a story graph.
//!
//! Gates and payments are ignored here: a point counts as reachable when some
//! chain of jumps leads to it, whatever the inventory would allow.

use std::collections::{HashSet, VecDeque};

use dp_core::StoryGraph;

/// A jump whose target is not defined in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingJump {
    /// Point the jump starts from.
    pub from: String,
    /// Missing target name.
    pub to: String,
}

/// Findings of [`analyze`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryReport {
    /// Jumps to undefined points, in graph order.
    pub dangling: Vec<DanglingJump>,
    /// Points that no chain of jumps from the start reaches.
    pub unreachable: Vec<String>,
    /// Points with no jump to a defined point.
    pub dead_ends: Vec<String>,
}

impl StoryReport {
    /// True if no dangling jumps or unreachable points were found.
    ///
    /// Dead ends are legitimate endings and do not count against a story.
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.unreachable.is_empty()
    }
}

/// Analyze `graph`, measuring reachability from `start`.
///
/// With no start point, reachability is not assessed.
pub fn analyze(graph: &StoryGraph, start: Option<&str>) -> StoryReport {
    let mut report = StoryReport::default();

    for point in graph.points() {
        let mut resolved = 0;
        for jump in point.jumps() {
            if graph.contains(jump) {
                resolved += 1;
            } else {
                report.dangling.push(DanglingJump {
                    from: point.name().to_string(),
                    to: jump.clone(),
                });
            }
        }
        if resolved == 0 {
            report.dead_ends.push(point.name().to_string());
        }
    }

    if let Some(start) = start.filter(|s| graph.contains(s)) {
        let reached = reachable_from(graph, start);
        report.unreachable = graph
            .names()
            .iter()
            .filter(|name| !reached.contains(name.as_str()))
            .cloned()
            .collect();
    }

    report
}

fn reachable_from<'a>(graph: &'a StoryGraph, start: &'a str) -> HashSet<&'a str> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(name) = queue.pop_front() {
        let Some(point) = graph.get(name) else {
            continue;
        };
        for jump in point.jumps() {
            if graph.contains(jump) && seen.insert(jump.as_str()) {
                queue.push_back(jump.as_str());
            }
        }
    }
    seen
}
