use std::collections::HashMap;

use tracing::warn;

use crate::error::{CoreError, CoreResult};
use crate::point::DialogPoint;

/// Collects dialog points into a [`StoryGraph`].
///
/// Inserting a point whose name is already present replaces the earlier
/// point (last write wins) and keeps its original listing position.
#[derive(Debug, Default)]
pub struct StoryGraphBuilder {
    points: HashMap<String, DialogPoint>,
    order: Vec<String>,
}

impl StoryGraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point. Returns the point it replaced, if any.
    pub fn insert(&mut self, point: DialogPoint) -> CoreResult<Option<DialogPoint>> {
        if point.name().is_empty() {
            return Err(CoreError::EmptyName {
                answer: point.answer().to_string(),
            });
        }

        let name = point.name().to_string();
        let replaced = self.points.insert(name.clone(), point);
        if replaced.is_some() {
            warn!(point = %name, "duplicate point name, keeping the later definition");
        } else {
            self.order.push(name);
        }
        Ok(replaced)
    }

    /// Insert a point, builder style.
    pub fn with_point(mut self, point: DialogPoint) -> CoreResult<Self> {
        self.insert(point)?;
        Ok(self)
    }

    /// Number of distinct points collected so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no points have been collected.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Finish building.
    pub fn build(self) -> StoryGraph {
        StoryGraph {
            points: self.points,
            order: self.order,
        }
    }
}

/// The complete set of dialog points for a story, keyed by name.
///
/// A graph is read-only once built; see [`StoryGraphBuilder`].
#[derive(Debug, Clone, Default)]
pub struct StoryGraph {
    points: HashMap<String, DialogPoint>,
    order: Vec<String>,
}

impl StoryGraph {
    /// Start building a graph.
    pub fn builder() -> StoryGraphBuilder {
        StoryGraphBuilder::new()
    }

    /// Look up a point by name.
    pub fn get(&self, name: &str) -> Option<&DialogPoint> {
        self.points.get(name)
    }

    /// Look up a point by name, failing if it does not exist.
    pub fn point(&self, name: &str) -> CoreResult<&DialogPoint> {
        self.get(name)
            .ok_or_else(|| CoreError::PointNotFound(name.to_string()))
    }

    /// True if a point with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.points.contains_key(name)
    }

    /// Iterate points in the order they were first inserted.
    pub fn points(&self) -> impl Iterator<Item = &DialogPoint> {
        self.order.iter().filter_map(|name| self.points.get(name))
    }

    /// Point names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the graph has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
