//! Remove-task handler

use crate::TrackerHandler;
use anyhow::Result;

impl TrackerHandler {
    /// Remove the matching task and persist the store
    ///
    /// Removing a title that is not present is a normal, reportable outcome.
    pub fn handle_remove(&mut self, title: &str) -> Result<String> {
        if !self.store.remove_by_title(title) {
            return Ok(format!(
                "No task titled '{}' was found for deletion.",
                title
            ));
        }

        self.save()?;
        Ok(format!("Task '{}' was deleted.", title))
    }
}
