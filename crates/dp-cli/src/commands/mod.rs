pub mod check;
pub mod export;
pub mod list;
pub mod play;

use std::path::PathBuf;

use clap::Args;
use dp_story::{Story, StoryResult, builtin};

/// File name looked up next to the executable when no story is given.
const DEFAULT_STORY_FILE: &str = "story.json";

/// Where to take the story from.
#[derive(Args)]
pub struct StoryArgs {
    /// Story file (default: story.json next to the dp executable)
    #[arg(short, long, conflicts_with = "builtin")]
    story: Option<PathBuf>,

    /// Use the built-in five-point scenario
    #[arg(short, long)]
    builtin: bool,
}

impl StoryArgs {
    /// The story file to read, when not using the built-in scenario.
    fn path(&self) -> PathBuf {
        self.story.clone().unwrap_or_else(default_story_path)
    }

    /// Load the selected story, keeping the typed error.
    fn try_load(&self) -> StoryResult<Story> {
        if self.builtin {
            return Ok(builtin::scenario());
        }
        dp_story::load_file(&self.path())
    }

    /// Load the selected story.
    fn load(&self) -> Result<Story, String> {
        self.try_load().map_err(|e| e.to_string())
    }
}

fn default_story_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_STORY_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORY_FILE))
}

/// Parse a `NAME=QTY` inventory argument.
pub fn parse_item(arg: &str) -> Result<(String, u32), String> {
    let (name, quantity) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=QTY, got '{arg}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing item name in '{arg}'"));
    }
    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid quantity in '{arg}': {e}"))?;
    Ok((name.to_string(), quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_item_accepts_name_and_quantity() {
        assert_eq!(parse_item("Gold=5"), Ok(("Gold".to_string(), 5)));
        assert_eq!(parse_item(" Flag = 1 "), Ok(("Flag".to_string(), 1)));
    }

    #[test]
    fn parse_item_rejects_bad_input() {
        assert!(parse_item("Gold").is_err());
        assert!(parse_item("=3").is_err());
        assert!(parse_item("Gold=-1").is_err());
    }
}
