//! Task domain models and business logic
//!
//! This module contains the core task data structures and their
//! implementations. It is split into submodules for better organization:
//! - `task`: The task record and its serialization form
//! - `store`: The ordered task collection with all CRUD operations

mod store;
mod task;

// Re-export all public types
pub use store::TaskStore;
pub use task::{Task, TaskRecord};
