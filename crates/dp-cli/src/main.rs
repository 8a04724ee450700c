//! CLI frontend for the Dialogpoint story engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::StoryArgs;

#[derive(Parser)]
#[command(
    name = "dp",
    about = "Dialogpoint: play branching stories with an inventory",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more detail to stderr (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a story interactively
    Play {
        #[command(flatten)]
        story: StoryArgs,

        /// Start at this point instead of the story's start point
        #[arg(long)]
        start: Option<String>,

        /// Add items to the starting inventory (repeatable)
        #[arg(short, long = "item", value_name = "NAME=QTY", value_parser = commands::parse_item)]
        items: Vec<(String, u32)>,

        /// How many jumps can be stepped back
        #[arg(long, default_value = "5")]
        depth: usize,

        /// Play the built-in scenario if the story cannot be loaded
        #[arg(long)]
        fallback: bool,
    },

    /// Check a story for dangling jumps and unreachable points
    Check {
        #[command(flatten)]
        story: StoryArgs,

        /// Measure reachability from this point
        #[arg(long)]
        start: Option<String>,
    },

    /// List the points of a story
    List {
        #[command(flatten)]
        story: StoryArgs,
    },

    /// Write a story as formatted JSON
    Export {
        #[command(flatten)]
        story: StoryArgs,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            story,
            start,
            items,
            depth,
            fallback,
        } => commands::play::run(&story, start, items, depth, fallback),
        Commands::Check { story, start } => commands::check::run(&story, start.as_deref()),
        Commands::List { story } => commands::list::run(&story),
        Commands::Export { story, output } => commands::export::run(&story, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
