//! taskdeck - a menu-driven task tracker
//!
//! Tasks carry a title, free-text details, a due date and a completion flag,
//! and are persisted to a JSON file between runs.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Presentation Layer**: `menu` module - Interactive menu loop and prompts
//! - **Domain Layer**: `tasks` module - Core task model and store operations
//! - **Persistence Layer**: `storage` module - File-based JSON storage
//!
//! The [`TrackerHandler`] sits between presentation and domain: one method per
//! menu command, each returning a human-readable outcome string. Mutating
//! commands persist the store before reporting success.
//!
//! # Example
//!
//! ```no_run
//! use taskdeck::TrackerHandler;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut handler = TrackerHandler::load("tasks.json")?;
//!     println!("{}", handler.handle_add("Buy milk", "2%", "2024-01-01")?);
//!     println!("{}", handler.handle_list());
//!     Ok(())
//! }
//! ```

mod formatting;
mod handlers;
pub mod menu;
mod storage;
mod tasks;
mod validation;

use anyhow::Result;
use std::path::Path;

// Re-export commonly used types
pub use storage::Storage;
pub use tasks::{Task, TaskRecord, TaskStore};

/// Application handler for the task tracker
///
/// Owns the in-memory [`TaskStore`] and its backing [`Storage`]. Everything is
/// single-threaded: handler methods take `&mut self` and there is exactly one
/// reader and writer at all times, so no locking is involved.
pub struct TrackerHandler {
    pub(crate) store: TaskStore,
    pub(crate) storage: Storage,
}

impl TrackerHandler {
    /// Create a handler by loading the given data file
    ///
    /// A missing or blank file yields an empty store. A failed load is
    /// propagated so the caller can report it and fall back to
    /// [`TrackerHandler::empty`]; startup must end in a usable handler either
    /// way.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let storage = Storage::new(path);
        let store = storage.load()?;
        Ok(Self { store, storage })
    }

    /// Create a handler with an empty store backed by the given data file
    pub fn empty(path: impl AsRef<Path>) -> Self {
        Self {
            store: TaskStore::new(),
            storage: Storage::new(path),
        }
    }

    /// Write the current store to the data file
    ///
    /// Callable at any point; the file always reflects the in-memory state at
    /// the moment of the call. The store is unaffected on failure.
    pub fn save(&self) -> Result<()> {
        self.storage.save(&self.store)
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &TaskStore {
        &self.store
    }
}
