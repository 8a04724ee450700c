use std::io::{self, BufRead, Write};

use colored::Colorize;

use dp_engine::{EngineConfig, PlayOptions, ViewEvent, Viewer};
use dp_story::builtin;

use super::StoryArgs;

pub fn run(
    story: &StoryArgs,
    start: Option<String>,
    items: Vec<(String, u32)>,
    depth: usize,
    fallback: bool,
) -> Result<(), String> {
    let mut options = PlayOptions::default()
        .with_engine(EngineConfig::default().with_back_stack_depth(depth));
    options.start = start;
    for (name, quantity) in items {
        options = options.with_item(name, quantity);
    }

    let mut viewer = Viewer::open(story.try_load(), &options);
    if let Some(reason) = viewer.no_content_reason() {
        if !fallback {
            return Err(reason.to_string());
        }
        eprintln!(
            "  {} {reason}; playing the built-in scenario",
            "warning:".yellow()
        );
        let builtin_options = PlayOptions {
            start: None,
            ..options.clone()
        };
        viewer = Viewer::new(builtin::scenario(), &builtin_options).map_err(|e| e.to_string())?;
    }

    if let Some(title) = viewer.title() {
        println!("  {}", title.bold());
    }
    println!("  Type a number to jump, 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", viewer.render());
    viewer.drain_events();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match viewer.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }

        for event in viewer.drain_events() {
            if let ViewEvent::InventoryChanged(items) = event {
                println!("  {}\n", format!("[carrying: {items}]").dimmed());
            }
        }
    }

    Ok(())
}
