use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat serialization form of a [`Task`]
///
/// The wire names (`id`, `title`, `details`, `dueDate`, `isComplete`) and the
/// array-of-objects file shape are the compatibility contract for the
/// persisted JSON document. Field order within an object is not significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    pub details: String,
    pub due_date: String,
    pub is_complete: bool,
}

/// One trackable item of work
///
/// The id is assigned exactly once at construction and never changes.
/// Completion is one-way: a task can be marked complete but never returns to
/// pending. Fields are private so both invariants hold by construction.
///
/// The due date is an opaque string. The store performs no parsing or
/// validation on it; format concerns live at the prompt level.
#[derive(Debug, Clone)]
pub struct Task {
    id: String,
    title: String,
    details: String,
    due_date: String,
    complete: bool,
}

impl Task {
    /// Create a task with a freshly generated id and pending status
    ///
    /// No validation is performed on any field here; title rules are
    /// enforced where tasks enter the system.
    pub fn new(
        title: impl Into<String>,
        details: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            details: details.into(),
            due_date: due_date.into(),
            complete: false,
        }
    }

    /// Rebuild a task from its persisted record, reusing the stored id verbatim
    pub fn from_record(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            details: record.details,
            due_date: record.due_date,
            complete: record.is_complete,
        }
    }

    /// Produce the serialization form of this task
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            details: self.details.clone(),
            due_date: self.due_date.clone(),
            is_complete: self.complete,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Title in its original case; comparisons elsewhere are case-insensitive
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Mark this task complete; idempotent
    pub fn mark_complete(&mut self) {
        self.complete = true;
    }
}
