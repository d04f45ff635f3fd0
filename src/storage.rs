use crate::tasks::{TaskRecord, TaskStore};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed persistence for a [`TaskStore`]
///
/// The on-disk format is a single JSON document: an array of task records.
/// An empty store persists as `[]`.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Load the store from the data file
    ///
    /// A missing or blank file loads as an empty store so a first run starts
    /// clean. Unreadable or malformed content is an error; the caller decides
    /// whether to keep going with an empty in-memory store.
    pub fn load(&self) -> Result<TaskStore> {
        if !self.file_path.exists() {
            return Ok(TaskStore::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("failed to read {}", self.file_path.display()))?;
        if content.trim().is_empty() {
            return Ok(TaskStore::new());
        }

        let records: Vec<TaskRecord> = serde_json::from_str(&content)
            .with_context(|| format!("malformed task file {}", self.file_path.display()))?;
        Ok(TaskStore::from_records(records))
    }

    /// Write the store to the data file, replacing any previous content
    ///
    /// The document is pretty-printed. The in-memory store is unaffected
    /// whether the write succeeds or fails.
    pub fn save(&self, store: &TaskStore) -> Result<()> {
        let content = serde_json::to_string_pretty(&store.to_records())?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("failed to write {}", self.file_path.display()))?;
        Ok(())
    }
}
