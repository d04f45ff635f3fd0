//! Mark-complete handler

use crate::TrackerHandler;
use anyhow::Result;

impl TrackerHandler {
    /// Mark the matching task complete and persist the store
    ///
    /// Completion is one-way and idempotent; an already-complete task reports
    /// success the same way as a freshly completed one.
    pub fn handle_complete(&mut self, title: &str) -> Result<String> {
        if !self.store.mark_complete_by_title(title) {
            return Ok(format!("Task '{}' was not found in the list.", title));
        }

        self.save()?;
        Ok(format!("Task '{}' was marked as complete.", title))
    }
}
