use super::task::{Task, TaskRecord};

/// Case-insensitive title comparison used by every lookup
fn title_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Ordered collection of tasks keyed logically by title
///
/// A Vec is the primary storage:
/// 1. Maintains insertion order for consistent JSON serialization
/// 2. Enables predictable iteration order for display
/// 3. Simple ownership model - the Vec owns all tasks directly
///
/// Invariant: no two tasks have titles that are equal under case-insensitive
/// comparison. This is enforced at [`TaskStore::add`] time only; records
/// loaded from a file bypass the check (see [`TaskStore::from_records`]).
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task unless its title is already taken
    ///
    /// Titles are compared case-insensitively. On a clash the new task is
    /// discarded and the task added first is retained (first write wins).
    ///
    /// # Returns
    /// Whether the task was inserted
    pub fn add(&mut self, task: Task) -> bool {
        if self
            .tasks
            .iter()
            .any(|t| title_eq(t.title(), task.title()))
        {
            return false;
        }
        self.tasks.push(task);
        true
    }

    /// Remove the task matching the given title
    ///
    /// The relative order of the remaining tasks is preserved.
    ///
    /// # Returns
    /// Whether a removal occurred; absence is a normal outcome, not an error
    pub fn remove_by_title(&mut self, title: &str) -> bool {
        if let Some(pos) = self.tasks.iter().position(|t| title_eq(t.title(), title)) {
            self.tasks.remove(pos);
            true
        } else {
            false
        }
    }

    /// Find a task by title, case-insensitively
    pub fn find_by_title(&self, title: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| title_eq(t.title(), title))
    }

    /// Find a task by title and return a mutable reference
    fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| title_eq(t.title(), title))
    }

    /// Mark the task matching the given title complete
    ///
    /// An already-complete task reports success the same way as a freshly
    /// completed one.
    ///
    /// # Returns
    /// Whether a matching task was found
    pub fn mark_complete_by_title(&mut self, title: &str) -> bool {
        match self.find_by_title_mut(title) {
            Some(task) => {
                task.mark_complete();
                true
            }
            None => false,
        }
    }

    /// Full task sequence in insertion order; empty slice for an empty store
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Rebuild a store from persisted records, in file order
    ///
    /// Loaded records skip the uniqueness check applied by [`TaskStore::add`]:
    /// a file that already contains duplicate titles is preserved as-is
    /// rather than deduplicated.
    pub fn from_records(records: Vec<TaskRecord>) -> Self {
        Self {
            tasks: records.into_iter().map(Task::from_record).collect(),
        }
    }

    /// Serialization form of every task, in store order
    pub fn to_records(&self) -> Vec<TaskRecord> {
        self.tasks.iter().map(Task::to_record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Duplicate titles are rejected regardless of case; the first task wins
    #[test]
    fn test_add_rejects_case_insensitive_duplicate() {
        let mut store = TaskStore::new();
        assert!(store.add(Task::new("Buy milk", "2%", "2024-01-01")));
        assert!(!store.add(Task::new("BUY MILK", "different details", "2099-01-01")));

        assert_eq!(store.len(), 1);
        let kept = store.find_by_title("buy milk").unwrap();
        assert_eq!(kept.title(), "Buy milk");
        assert_eq!(kept.details(), "2%");
    }

    // Vec keeps insertion order; no operation re-sorts
    #[test]
    fn test_store_maintains_insertion_order() {
        let mut store = TaskStore::new();
        let titles = ["first", "second", "third", "fourth", "fifth"];
        for title in &titles {
            store.add(Task::new(*title, "", ""));
        }

        for (i, task) in store.tasks().iter().enumerate() {
            assert_eq!(task.title(), titles[i]);
        }
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut store = TaskStore::new();
        store.add(Task::new("a", "", ""));
        store.add(Task::new("b", "", ""));
        store.add(Task::new("c", "", ""));

        assert!(store.remove_by_title("B"));
        let remaining: Vec<&str> = store.tasks().iter().map(|t| t.title()).collect();
        assert_eq!(remaining, vec!["a", "c"]);

        assert!(!store.remove_by_title("b"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_mark_complete_by_title() {
        let mut store = TaskStore::new();
        store.add(Task::new("X", "d", "2024-01-01"));

        assert!(store.mark_complete_by_title("x"));
        assert!(store.find_by_title("X").unwrap().is_complete());

        // Second call reports success the same way
        assert!(store.mark_complete_by_title("X"));
        assert!(store.find_by_title("X").unwrap().is_complete());

        assert!(!store.mark_complete_by_title("missing"));
    }

    // from_records trusts the file: duplicates survive a load
    #[test]
    fn test_from_records_preserves_duplicates() {
        let record = |id: &str, title: &str| TaskRecord {
            id: id.to_string(),
            title: title.to_string(),
            details: String::new(),
            due_date: String::new(),
            is_complete: false,
        };

        let store = TaskStore::from_records(vec![
            record("1", "Same"),
            record("2", "same"),
            record("3", "Other"),
        ]);

        assert_eq!(store.len(), 3);
        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec!["Same", "same", "Other"]);
    }
}
