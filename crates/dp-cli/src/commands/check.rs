use colored::Colorize;

use dp_engine::config::DEFAULT_START;
use dp_story::analyze;

use super::StoryArgs;

pub fn run(args: &StoryArgs, start: Option<&str>) -> Result<(), String> {
    let story = args.load()?;
    let start = start
        .or(story.start.as_deref())
        .unwrap_or(DEFAULT_START);

    if !story.graph.contains(start) {
        return Err(format!("start point \"{start}\" is not defined"));
    }

    let report = analyze(&story.graph, Some(start));

    for name in &story.duplicates {
        println!(
            "  {} point \"{name}\" is defined more than once; the last definition is used",
            "warning:".yellow()
        );
    }
    for jump in &report.dangling {
        println!(
            "  {} \"{}\" jumps to undefined point \"{}\"",
            "error:".red(),
            jump.from,
            jump.to
        );
    }
    for name in &report.unreachable {
        println!(
            "  {} \"{name}\" cannot be reached from \"{start}\"",
            "error:".red()
        );
    }
    for name in &report.dead_ends {
        println!("  {} \"{name}\" is an ending (no outgoing jumps)", "note:".cyan());
    }

    if !report.is_clean() {
        let problems = report.dangling.len() + report.unreachable.len();
        return Err(format!(
            "{problems} problem{} found",
            if problems == 1 { "" } else { "s" }
        ));
    }

    println!(
        "  All checks passed: {} points, starting at \"{start}\".",
        story.graph.len()
    );
    Ok(())
}
