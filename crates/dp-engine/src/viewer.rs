//! Front-end facade over the navigator.
//!
//! A [`Viewer`] is what a front-end holds: the displayed text, the list of
//! jump labels, the inventory, and the two player commands. It also covers
//! the case where the story failed to load, so front-ends never end up
//! driving an empty graph.

use std::fmt::Write as _;

use dp_core::Inventory;
use dp_story::{Story, StoryResult};
use tracing::{info, warn};

use crate::config::PlayOptions;
use crate::error::{EngineError, EngineResult};
use crate::event::ViewEvent;
use crate::navigator::Navigator;

/// Text displayed while no story is loaded.
pub const NO_CONTENT_TEXT: &str = "No story loaded.";

#[derive(Debug)]
enum ViewerState {
    Ready(Box<Navigator>),
    NoContent { reason: String },
}

/// A playable story, or the reason there is none.
#[derive(Debug)]
pub struct Viewer {
    title: Option<String>,
    state: ViewerState,
}

impl Viewer {
    /// Start playing `story`.
    ///
    /// Fails if the resolved start point is not in the story.
    pub fn new(story: Story, options: &PlayOptions) -> EngineResult<Self> {
        let start = options.start_for(&story);
        let inventory = options.inventory_for(&story);
        let navigator = Navigator::start(story.graph, inventory, &start, options.engine.clone())?;
        info!(start = %start, "story started");
        Ok(Self {
            title: story.title,
            state: ViewerState::Ready(Box::new(navigator)),
        })
    }

    /// Start playing the result of a story load.
    ///
    /// A failed load, or a story that cannot be started, yields a viewer in
    /// the no-content state carrying the failure reason.
    pub fn open(loaded: StoryResult<Story>, options: &PlayOptions) -> Self {
        let result = loaded
            .map_err(|e| e.to_string())
            .and_then(|story| Self::new(story, options).map_err(|e| e.to_string()));
        match result {
            Ok(viewer) => viewer,
            Err(reason) => Self::no_content(reason),
        }
    }

    /// A viewer with nothing to play.
    pub fn no_content(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        warn!(%reason, "no story content");
        Self {
            title: None,
            state: ViewerState::NoContent { reason },
        }
    }

    /// True if a story is loaded and playable.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, ViewerState::Ready(_))
    }

    /// Why no story is loaded, if that is the case.
    pub fn no_content_reason(&self) -> Option<&str> {
        match &self.state {
            ViewerState::NoContent { reason } => Some(reason),
            ViewerState::Ready(_) => None,
        }
    }

    /// Story title, when the story has one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The navigator, when a story is loaded.
    pub fn navigator(&self) -> Option<&Navigator> {
        match &self.state {
            ViewerState::Ready(nav) => Some(&**nav),
            ViewerState::NoContent { .. } => None,
        }
    }

    /// Text to display.
    pub fn answer(&self) -> &str {
        self.navigator().map_or(NO_CONTENT_TEXT, Navigator::answer)
    }

    /// Labels of the selectable jumps.
    pub fn jumps(&self) -> &[String] {
        match self.navigator() {
            Some(nav) => nav.available_jumps(),
            None => &[],
        }
    }

    /// The player's inventory, when a story is loaded.
    pub fn inventory(&self) -> Option<&Inventory> {
        self.navigator().map(Navigator::inventory)
    }

    /// Select the jump at `index` (zero-based).
    pub fn select_jump(&mut self, index: usize) -> EngineResult<()> {
        self.navigator_mut()?.select_jump(index)
    }

    /// Step back. Returns `false` when there is nothing to step back from.
    pub fn go_back(&mut self) -> EngineResult<bool> {
        self.navigator_mut()?.jump_back()
    }

    /// Take all queued change notifications.
    pub fn drain_events(&mut self) -> Vec<ViewEvent> {
        match &mut self.state {
            ViewerState::Ready(nav) => nav.drain_events(),
            ViewerState::NoContent { .. } => Vec::new(),
        }
    }

    /// The current answer followed by the numbered jump list.
    pub fn render(&self) -> String {
        let mut out = String::from(self.answer());
        out.push('\n');
        for (i, jump) in self.jumps().iter().enumerate() {
            let _ = write!(out, "\n  {}. {jump}", i + 1);
        }
        if self.is_ready() && self.jumps().is_empty() {
            out.push_str("\n  (no moves left; type 'back' to step back)");
        }
        out
    }

    /// Process a line of player input and return the text to show.
    ///
    /// A number selects the jump with that (one-based) position; `back`,
    /// `inventory`, `look`, `help`, and `quit` do what they say.
    pub fn process(&mut self, input: &str) -> EngineResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        if let Ok(number) = trimmed.parse::<usize>() {
            let index = number
                .checked_sub(1)
                .ok_or_else(|| EngineError::UnknownCommand(trimmed.to_string()))?;
            self.select_jump(index)?;
            return Ok(self.render());
        }

        match trimmed.to_lowercase().as_str() {
            "back" | "b" => {
                if self.go_back()? {
                    Ok(self.render())
                } else {
                    Ok("There is nowhere to step back to.".to_string())
                }
            }
            "inventory" | "inv" | "i" => self.do_inventory(),
            "look" | "l" => Ok(self.render()),
            "help" | "h" | "?" => Ok(help_text()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(EngineError::UnknownCommand(trimmed.to_string())),
        }
    }

    fn do_inventory(&self) -> EngineResult<String> {
        let inventory = self.inventory().ok_or_else(|| self.no_content_error())?;
        if inventory.is_empty() {
            return Ok("You are carrying nothing.".to_string());
        }
        let mut out = String::from("You are carrying:");
        for (item, quantity) in inventory.iter() {
            let _ = write!(out, "\n  {item}: {quantity}");
        }
        Ok(out)
    }

    fn navigator_mut(&mut self) -> EngineResult<&mut Navigator> {
        match &mut self.state {
            ViewerState::Ready(nav) => Ok(&mut **nav),
            ViewerState::NoContent { reason } => Err(EngineError::NoContent(reason.clone())),
        }
    }

    fn no_content_error(&self) -> EngineError {
        EngineError::NoContent(self.no_content_reason().unwrap_or_default().to_string())
    }
}

fn help_text() -> String {
    [
        "Commands:",
        "  <number>         take the jump with that number",
        "  back, b          step back, undoing what the last jump cost and gave",
        "  inventory, i     show what you are carrying",
        "  look, l          show the current text and jumps again",
        "  help, h          show this help",
        "  quit, q          leave the story",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dp_story::{StoryError, builtin, load_str};

    fn builtin_viewer() -> Viewer {
        Viewer::new(builtin::scenario(), &PlayOptions::default()).unwrap()
    }

    #[test]
    fn builtin_viewer_ready() {
        let viewer = builtin_viewer();
        assert!(viewer.is_ready());
        assert_eq!(viewer.title(), Some("Built-in scenario"));
        assert_eq!(viewer.answer(), "Your are in first point");
        assert_eq!(viewer.jumps().len(), 3);
        assert_eq!(viewer.inventory().unwrap().quantity("Gold"), 50);
    }

    #[test]
    fn failed_load_gives_no_content() {
        let mut viewer = Viewer::open(Err(StoryError::NoPoints), &PlayOptions::default());
        assert!(!viewer.is_ready());
        assert_eq!(viewer.no_content_reason(), Some("story contains no points"));
        assert_eq!(viewer.answer(), NO_CONTENT_TEXT);
        assert!(viewer.jumps().is_empty());
        assert!(viewer.inventory().is_none());
        assert!(matches!(
            viewer.select_jump(0),
            Err(EngineError::NoContent(_))
        ));
        assert!(matches!(viewer.go_back(), Err(EngineError::NoContent(_))));
        assert!(viewer.drain_events().is_empty());
    }

    #[test]
    fn missing_start_gives_no_content() {
        let story = load_str(r#"{"points": [{"name": "Somewhere", "answer": "Hi"}]}"#);
        let viewer = Viewer::open(story, &PlayOptions::default());
        assert!(viewer.no_content_reason().unwrap().contains("First"));
    }

    #[test]
    fn process_number_selects_one_based() {
        let mut viewer = builtin_viewer();
        let out = viewer.process("2").unwrap();
        assert!(out.starts_with("Your are in third point"));
        assert_eq!(viewer.inventory().unwrap().quantity("Gold"), 60);
    }

    #[test]
    fn process_zero_and_out_of_range() {
        let mut viewer = builtin_viewer();
        assert!(matches!(
            viewer.process("0"),
            Err(EngineError::UnknownCommand(_))
        ));
        assert!(matches!(
            viewer.process("9"),
            Err(EngineError::InvalidSelection { index: 8, .. })
        ));
    }

    #[test]
    fn process_back_and_inventory() {
        let mut viewer = builtin_viewer();
        assert_eq!(
            viewer.process("back").unwrap(),
            "There is nowhere to step back to."
        );
        viewer.process("2").unwrap();
        viewer.process("b").unwrap();
        assert_eq!(viewer.process("i").unwrap(), "You are carrying:\n  Gold: 50");
    }

    #[test]
    fn process_unknown_command() {
        let mut viewer = builtin_viewer();
        assert!(matches!(
            viewer.process("dance"),
            Err(EngineError::UnknownCommand(_))
        ));
        assert_eq!(viewer.process("   ").unwrap(), "");
    }

    #[test]
    fn render_numbers_jumps() {
        let viewer = builtin_viewer();
        assert_eq!(
            viewer.render(),
            "Your are in first point\n\n  1. Second point\n  2. Third point\n  3. Fourth point"
        );
    }

    #[test]
    fn extra_items_unlock_first_point() {
        let options = PlayOptions::default()
            .with_start("Second point")
            .with_item("Flag", 1);
        let viewer = Viewer::new(builtin::scenario(), &options).unwrap();
        assert_eq!(viewer.jumps()[0], "First point");
    }
}
