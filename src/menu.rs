//! Interactive menu loop
//!
//! Presentation glue around [`TrackerHandler`]: renders the numbered menu,
//! reads choices and task fields from stdin, and prints the outcome message
//! of every command. No business logic lives here.

use crate::TrackerHandler;
use crate::validation;
use anyhow::Result;
use std::io::{self, Write};
use std::str::FromStr;

/// One menu command, parsed from the user's numeric choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    ListAll,
    Add,
    ViewDetails,
    MarkComplete,
    Remove,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(MenuChoice::Exit),
            "1" => Ok(MenuChoice::ListAll),
            "2" => Ok(MenuChoice::Add),
            "3" => Ok(MenuChoice::ViewDetails),
            "4" => Ok(MenuChoice::MarkComplete),
            "5" => Ok(MenuChoice::Remove),
            _ => Err(format!(
                "Invalid choice '{}'. Please choose a valid option.",
                s.trim()
            )),
        }
    }
}

fn render_menu() -> String {
    let mut text = format!("{:_^40}\n", "Task Tracker");
    text.push_str(&format!("{:<40}\n", "    1.) View All Tasks"));
    text.push_str(&format!("{:<40}\n", "    2.) Add New Task"));
    text.push_str(&format!("{:<40}\n", "    3.) View Task Details"));
    text.push_str(&format!("{:<40}\n", "    4.) Mark A Task Complete"));
    text.push_str(&format!("{:<40}\n", "    5.) Remove A Task"));
    text.push_str(&format!("{:<40}", "    0.) Exit"));
    text
}

/// Print a label and read one trimmed line; `None` on end of input
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn pause() -> io::Result<()> {
    prompt("Press Enter to continue... ")?;
    Ok(())
}

/// Print a handler outcome; persistence failures go to stderr
fn report(outcome: Result<String>) {
    match outcome {
        Ok(message) => println!("{message}"),
        Err(err) => eprintln!("Error: {err:#}"),
    }
}

/// Prompt for the fields of a new task, confirm, and add it
fn add_flow(handler: &mut TrackerHandler) -> io::Result<()> {
    let Some(title) = prompt("Enter title of task: ")? else {
        return Ok(());
    };
    let Some(details) = prompt("Enter some details of task: ")? else {
        return Ok(());
    };
    let Some(due_date) = prompt("Enter due date (YYYY-MM-DD): ")? else {
        return Ok(());
    };

    if !due_date.is_empty() && validation::parse_due_date(&due_date).is_none() {
        println!("Warning: '{due_date}' is not a YYYY-MM-DD date; it will be stored as entered.");
    }

    println!("You entered the following information:");
    println!("{:<24} {:<14} {}", "Title", "Due Date", "Details");
    println!("{:<24} {:<14} {}", title, due_date, details);

    let Some(confirm) = prompt("Does this information look correct? (y/n) ")? else {
        return Ok(());
    };
    if confirm.eq_ignore_ascii_case("y") || confirm.eq_ignore_ascii_case("yes") {
        report(handler.handle_add(&title, &details, &due_date));
    } else {
        println!("Task was not committed to the list.");
    }
    Ok(())
}

/// Run the menu loop until the user exits or input ends
pub fn run(handler: &mut TrackerHandler) -> Result<()> {
    loop {
        println!("{}", render_menu());
        let Some(input) = prompt("Please choose an option: ")? else {
            break;
        };

        match input.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => break,
            Ok(MenuChoice::ListAll) => println!("{}", handler.handle_list()),
            Ok(MenuChoice::Add) => add_flow(handler)?,
            Ok(MenuChoice::ViewDetails) => {
                let Some(title) = prompt("Enter the task title to view: ")? else {
                    break;
                };
                println!("{}", handler.handle_view(&title));
            }
            Ok(MenuChoice::MarkComplete) => {
                let Some(title) = prompt("Enter a task title to mark complete: ")? else {
                    break;
                };
                report(handler.handle_complete(&title));
            }
            Ok(MenuChoice::Remove) => {
                let Some(title) = prompt("Enter the task title you would like to delete: ")?
                else {
                    break;
                };
                report(handler.handle_remove(&title));
            }
            Err(message) => println!("{message}"),
        }

        pause()?;
    }

    println!("Application exiting...");
    Ok(())
}
