use std::path::Path;

use super::StoryArgs;

pub fn run(args: &StoryArgs, output: Option<&Path>) -> Result<(), String> {
    let story = args.load()?;
    let json = story
        .to_document()
        .to_json()
        .map_err(|e| format!("failed to serialize story: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, format!("{json}\n"))
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        println!("  Exported {} points to {}", story.graph.len(), path.display());
    } else {
        println!("{json}");
    }

    Ok(())
}
