//! Formatting helper functions for task display
//!
//! This module contains the formatting logic for the task list table and the
//! single-task detail view.

use crate::tasks::Task;

/// Display label for a completion flag
pub fn status_label(complete: bool) -> &'static str {
    if complete { "COMPLETE" } else { "INCOMPLETE" }
}

/// Format the full task list as a table of title, due date and status
///
/// # Returns
/// Formatted string representation of the tasks
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "There are currently no tasks in the list.".to_string();
    }

    let mut result = format!("{:_<24} {:_<14} {}\n", "Title", "Due Date", "Status");
    for task in tasks {
        result.push_str(&format!(
            "{:<24} {:<14} {}\n",
            task.title(),
            task.due_date(),
            status_label(task.is_complete())
        ));
    }
    result
}

/// Format one task's full detail
pub fn format_task_detail(task: &Task) -> String {
    let mut result = format!(
        "{:<24} {}\n",
        task.title(),
        status_label(task.is_complete())
    );
    result.push_str(&format!("  Due date: {}\n", task.due_date()));
    if !task.details().is_empty() {
        result.push_str(&format!("  Details: {}\n", task.details()));
    }
    result.push_str(&format!("  Id: {}\n", task.id()));
    result
}
