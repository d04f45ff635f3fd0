//! Input checks applied at the presentation boundary
//!
//! The store itself accepts any strings; these helpers gate what user input
//! is allowed to become a task and feed the due-date format warning.

use chrono::NaiveDate;

/// Check that a title contains at least one non-whitespace character
///
/// # Returns
/// `Err` with a user-facing message when the title is blank
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        Err("Title must not be empty.".to_string())
    } else {
        Ok(())
    }
}

/// Parse a due date in the YYYY-MM-DD format the prompts suggest
///
/// Due dates are stored verbatim either way; a `None` here only triggers a
/// warning at the prompt.
pub fn parse_due_date(due_date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(due_date, "%Y-%m-%d").ok()
}
