//! Add-task handler

use crate::TrackerHandler;
use crate::tasks::Task;
use crate::validation;
use anyhow::Result;

impl TrackerHandler {
    /// Create a task from three user-supplied strings and insert it
    ///
    /// Titles are unique case-insensitively: on a clash the new task is
    /// discarded, the earlier task wins, and the outcome message says so.
    /// The store is persisted after a successful insert.
    pub fn handle_add(&mut self, title: &str, details: &str, due_date: &str) -> Result<String> {
        if let Err(message) = validation::validate_title(title) {
            return Ok(message);
        }

        let task = Task::new(title, details, due_date);
        if !self.store.add(task) {
            return Ok(format!(
                "A task titled '{}' already exists; the new task was discarded.",
                title
            ));
        }

        self.save()?;
        Ok(format!("Task '{}' was added to the list.", title))
    }
}
