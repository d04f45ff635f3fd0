//! Detail-view handler

use crate::TrackerHandler;
use crate::formatting;

impl TrackerHandler {
    /// Render one task's full detail, looked up by title case-insensitively
    pub fn handle_view(&self, title: &str) -> String {
        match self.store.find_by_title(title) {
            Some(task) => formatting::format_task_detail(task),
            None => format!("Task '{}' was not found in the list.", title),
        }
    }
}
