//! taskdeck - Main Entry Point
//!
//! Parses the command line, loads the task file, and hands control to the
//! interactive menu loop in the `taskdeck` library.

use anyhow::Result;
use clap::Parser;
use taskdeck::{TrackerHandler, menu};

/// taskdeck - menu-driven task tracking with JSON file persistence
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task data file
    #[arg(default_value = "tasks.json")]
    file: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // A load failure must not take the application down: report it and start
    // with an empty list instead.
    let mut handler = match TrackerHandler::load(&args.file) {
        Ok(handler) => handler,
        Err(err) => {
            eprintln!("Error loading {}: {err:#}", args.file);
            eprintln!("Starting with an empty task list.");
            TrackerHandler::empty(&args.file)
        }
    };

    menu::run(&mut handler)
}
