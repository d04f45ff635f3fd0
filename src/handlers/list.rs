//! List handler

use crate::TrackerHandler;
use crate::formatting;

impl TrackerHandler {
    /// Render the full task list (title, due date, status) in insertion order
    pub fn handle_list(&self) -> String {
        formatting::format_task_list(self.store.tasks())
    }
}
