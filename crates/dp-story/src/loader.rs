use std::path::Path;

use dp_core::{ItemMap, StoryGraph, StoryGraphBuilder};
use tracing::{debug, info};

use crate::document::StoryDocument;
use crate::error::{StoryError, StoryResult};

/// A loaded story: its graph plus the header information from the document.
#[derive(Debug, Clone)]
pub struct Story {
    /// Title from the document header.
    pub title: Option<String>,
    /// Start point named by the header. Guaranteed to exist in `graph`.
    pub start: Option<String>,
    /// Starting inventory named by the header.
    pub inventory: Option<ItemMap>,
    /// The story graph.
    pub graph: StoryGraph,
    /// Names defined more than once; the later definition was kept.
    pub duplicates: Vec<String>,
}

impl Story {
    /// Wrap a graph built elsewhere, with no header information.
    pub fn from_graph(graph: StoryGraph) -> Self {
        Self {
            title: None,
            start: None,
            inventory: None,
            graph,
            duplicates: Vec::new(),
        }
    }

    /// Build a story from a parsed document.
    ///
    /// Either the whole document is accepted or an error is returned;
    /// no partially built graph escapes.
    pub fn from_document(doc: StoryDocument) -> StoryResult<Self> {
        if doc.points.is_empty() {
            return Err(StoryError::NoPoints);
        }

        let mut builder = StoryGraphBuilder::new();
        let mut duplicates = Vec::new();
        for point in doc.points {
            let name = point.name().to_string();
            if builder.insert(point)?.is_some() && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
        let graph = builder.build();

        if let Some(start) = &doc.start
            && !graph.contains(start)
        {
            return Err(StoryError::UnknownStart(start.clone()));
        }

        Ok(Self {
            title: doc.title,
            start: doc.start,
            inventory: doc.inventory,
            graph,
            duplicates,
        })
    }

    /// Convert back into a document, header included.
    pub fn to_document(&self) -> StoryDocument {
        StoryDocument {
            title: self.title.clone(),
            start: self.start.clone(),
            inventory: self.inventory.clone(),
            ..StoryDocument::from_graph(&self.graph)
        }
    }
}

/// Load a story from JSON text.
pub fn load_str(source: &str) -> StoryResult<Story> {
    let doc = StoryDocument::from_json(source)?;
    let story = Story::from_document(doc)?;
    debug!(points = story.graph.len(), "story parsed");
    Ok(story)
}

/// Load a story from a JSON file.
pub fn load_file(path: &Path) -> StoryResult<Story> {
    let source = std::fs::read_to_string(path).map_err(|source| StoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let story = load_str(&source)?;
    info!(
        path = %path.display(),
        points = story.graph.len(),
        duplicates = story.duplicates.len(),
        "story loaded"
    );
    Ok(story)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SMALL: &str = r#"{
        "title": "Small",
        "start": "a",
        "points": [
            {"name": "a", "answer": "A", "jumps": ["b"]},
            {"name": "b", "answer": "B", "jumps": ["a"]}
        ]
    }"#;

    #[test]
    fn loads_points_and_header() {
        let story = load_str(SMALL).unwrap();
        assert_eq!(story.title.as_deref(), Some("Small"));
        assert_eq!(story.start.as_deref(), Some("a"));
        assert_eq!(story.graph.len(), 2);
        assert!(story.duplicates.is_empty());
    }

    #[test]
    fn duplicate_points_overwrite_and_are_reported() {
        let story = load_str(
            r#"{"points": [
                {"name": "a", "answer": "old"},
                {"name": "a", "answer": "new"},
                {"name": "a", "answer": "newest"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(story.graph.len(), 1);
        assert_eq!(story.graph.get("a").unwrap().answer(), "newest");
        assert_eq!(story.duplicates, ["a"]);
    }

    #[test]
    fn malformed_json_fails() {
        let err = load_str(r#"{"points": [ {"name": "a" "#).unwrap_err();
        assert!(matches!(err, StoryError::Json(_)));
    }

    #[test]
    fn empty_story_fails() {
        let err = load_str(r#"{"points": []}"#).unwrap_err();
        assert!(matches!(err, StoryError::NoPoints));
    }

    #[test]
    fn empty_name_fails_whole_load() {
        let err = load_str(
            r#"{"points": [{"name": "a", "answer": "A"}, {"name": "", "answer": "?"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, StoryError::Point(_)));
    }

    #[test]
    fn unknown_start_fails() {
        let err = load_str(r#"{"start": "z", "points": [{"name": "a", "answer": "A"}]}"#)
            .unwrap_err();
        assert!(matches!(err, StoryError::UnknownStart(ref s) if s == "z"));
    }

    #[test]
    fn document_round_trip_keeps_header() {
        let story = load_str(SMALL).unwrap();
        let reloaded = load_str(&story.to_document().to_json().unwrap()).unwrap();
        assert_eq!(reloaded.title, story.title);
        assert_eq!(reloaded.start, story.start);
        assert_eq!(reloaded.graph.names(), story.graph.names());
    }

    #[test]
    fn load_file_reads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("story.json");
        fs::write(&path, SMALL).unwrap();

        let story = load_file(&path).unwrap();
        assert_eq!(story.graph.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StoryError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }
}
