//! # Ticklist Core
//!
//! Core types and the storage contract for the ticklist to-do service.
//!
//! This crate owns the domain model and nothing else:
//!
//! - **`TodoItem`**: a named task with a done flag
//! - **`TodoList`**: an ordered sequence of items, identified by position
//! - **`TodoStore`**: the seam between the domain and durable storage
//!
//! Mutations (`add`, `toggle`) are pure methods on [`TodoList`]; they never
//! touch storage. Persistence is a separate, explicit step through a
//! [`TodoStore`], so there is no hidden I/O inside a state change.
//!
//! ## Request Shape
//!
//! Every request against the list is a single linear sequence:
//!
//! ```text
//! load → (mutate)? → (save)? → render/redirect
//! ```
//!
//! The list is fully reconstructed from storage at the start of a request and
//! fully rewritten at the end of a mutating one. There is no in-process cache
//! and no partial-update protocol.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod store;
pub mod todo;

pub use store::{StoreError, TodoStore};
pub use todo::{ListError, TodoItem, TodoList};
