//! Menu command handlers for the task tracker
//!
//! This module contains the implementation of all menu command handlers.
//! Each handler is in a separate file for better organization. Handlers
//! return outcome messages for the menu loop to print; "not found" and
//! "duplicate title" are normal outcomes inside `Ok`, while `Err` is reserved
//! for persistence failures.

mod add;
mod complete;
mod list;
mod remove;
mod view;
