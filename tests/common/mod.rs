//! Common test utilities for integration tests

use taskdeck::{Task, TrackerHandler};
use tempfile::NamedTempFile;

/// Create a handler backed by a fresh temporary data file
pub fn get_test_handler() -> (TrackerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = TrackerHandler::load(temp_file.path()).unwrap();
    (handler, temp_file)
}

/// Create a test task with placeholder details and due date
#[allow(dead_code)]
pub fn sample_task(title: &str) -> Task {
    Task::new(title, "details", "2024-01-01")
}
