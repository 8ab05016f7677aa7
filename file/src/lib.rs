//! Flat-file JSON store for the ticklist to-do service.
//!
//! This crate provides the production implementation of the `TodoStore`
//! trait from `ticklist-core`, backed by a single JSON file on local disk:
//!
//! - Absent file on load yields an empty list (not an error)
//! - Unparseable file on load is surfaced as `StoreError::Corrupt`
//! - Save writes to a temp file in the same directory and atomically
//!   renames it over the backing file, so a failed save never leaves a
//!   partially written list behind
//!
//! # Example
//!
//! ```ignore
//! use ticklist_file::FileTodoStore;
//!
//! let store = FileTodoStore::new("todos.json");
//! let mut list = store.load().await?;
//! list.add("Buy milk");
//! store.save(&list).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod store;

pub use store::FileTodoStore;
