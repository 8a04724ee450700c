use dp_core::{DialogPoint, ItemMap, StoryGraph};
use serde::{Deserialize, Serialize};

/// On-disk shape of a story.
///
/// ```json
/// {
///   "title": "The Cave",
///   "start": "Entrance",
///   "inventory": { "Gold": 50 },
///   "points": [
///     { "name": "Entrance", "answer": "A dark cave.", "jumps": ["Tunnel"] },
///     { "name": "Tunnel", "answer": "Dripping water.", "payment": { "Gold": 5 } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryDocument {
    /// Human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Name of the point where play begins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Items the player starts with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<ItemMap>,
    /// Point records, in authoring order.
    #[serde(default)]
    pub points: Vec<DialogPoint>,
}

impl StoryDocument {
    /// Build a document from an existing graph, listing points in graph order.
    pub fn from_graph(graph: &StoryGraph) -> Self {
        Self {
            points: graph.points().cloned().collect(),
            ..Self::default()
        }
    }

    /// Parse a document from JSON text.
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    /// Render the document as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_fields_are_optional() {
        let doc = StoryDocument::from_json(r#"{"points": []}"#).unwrap();
        assert!(doc.title.is_none());
        assert!(doc.start.is_none());
        assert!(doc.inventory.is_none());
    }

    #[test]
    fn parses_full_document() {
        let doc = StoryDocument::from_json(
            r#"{
                "title": "Test",
                "start": "a",
                "inventory": {"Gold": 50},
                "points": [
                    {"name": "a", "answer": "A", "jumps": ["b"], "keys": {"Flag": 1}},
                    {"name": "b", "answer": "B", "award": {"Gold": 10}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.title.as_deref(), Some("Test"));
        assert_eq!(doc.inventory.unwrap().get("Gold"), 50);
        assert_eq!(doc.points.len(), 2);
        assert_eq!(doc.points[0].entry_keys().get("Flag"), 1);
        assert_eq!(doc.points[1].entry_award().get("Gold"), 10);
    }

    #[test]
    fn from_graph_keeps_point_order() {
        let graph = StoryGraph::builder()
            .with_point(DialogPoint::new("second", "2"))
            .unwrap()
            .with_point(DialogPoint::new("first", "1"))
            .unwrap()
            .build();
        let doc = StoryDocument::from_graph(&graph);
        let names: Vec<&str> = doc.points.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["second", "first"]);

        let json = doc.to_json().unwrap();
        assert_eq!(StoryDocument::from_json(&json).unwrap(), doc);
    }
}
