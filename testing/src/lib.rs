//! # Ticklist Testing
//!
//! Testing utilities for the ticklist to-do service.
//!
//! This crate provides:
//! - `InMemoryTodoStore`: a fast, deterministic `TodoStore` for tests
//! - Fault injection for the load/save paths, so handler error handling is
//!   testable without a filesystem
//!
//! ## Example
//!
//! ```ignore
//! use ticklist_testing::InMemoryTodoStore;
//!
//! #[tokio::test]
//! async fn add_appends() {
//!     let store = InMemoryTodoStore::new();
//!     let mut list = store.load().await.unwrap();
//!     list.add("X");
//!     store.save(&list).await.unwrap();
//!
//!     assert_eq!(store.load().await.unwrap().len(), 1);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use ticklist_core::{StoreError, TodoItem, TodoList, TodoStore};

/// In-memory `TodoStore` for fast, deterministic tests.
///
/// Holds the list behind a `Mutex`: the same whole-list load/save contract
/// as the file store, without any I/O. `fail_next_load` / `fail_next_save`
/// arm a one-shot injected failure so error paths can be exercised.
#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    list: Mutex<TodoList>,
    fail_next_load: AtomicBool,
    fail_next_save: AtomicBool,
}

impl InMemoryTodoStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with `(name, done)` entries in order.
    #[must_use]
    pub fn seeded<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let list = entries
            .into_iter()
            .map(|(name, done)| TodoItem {
                name: name.into(),
                done,
            })
            .collect();
        Self {
            list: Mutex::new(list),
            fail_next_load: AtomicBool::new(false),
            fail_next_save: AtomicBool::new(false),
        }
    }

    /// Arms a one-shot failure on the next `load` call.
    pub fn fail_next_load(&self) {
        self.fail_next_load.store(true, Ordering::SeqCst);
    }

    /// Arms a one-shot failure on the next `save` call.
    pub fn fail_next_save(&self) {
        self.fail_next_save.store(true, Ordering::SeqCst);
    }

    /// Snapshot of the currently stored list.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned, which only happens after a
    /// panic in another test thread.
    #[must_use]
    #[allow(clippy::unwrap_used)] // Mutex poison is unrecoverable
    pub fn snapshot(&self) -> TodoList {
        self.list.lock().unwrap().clone()
    }

    fn injected_failure(&self) -> StoreError {
        StoreError::Io {
            path: PathBuf::from("<in-memory>"),
            source: std::io::Error::other("injected failure"),
        }
    }
}

impl TodoStore for InMemoryTodoStore {
    fn load(&self) -> Pin<Box<dyn Future<Output = Result<TodoList, StoreError>> + Send + '_>> {
        Box::pin(async move {
            if self.fail_next_load.swap(false, Ordering::SeqCst) {
                return Err(self.injected_failure());
            }
            Ok(self.snapshot())
        })
    }

    fn save<'a>(
        &'a self,
        list: &'a TodoList,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'a>> {
        Box::pin(async move {
            if self.fail_next_save.swap(false, Ordering::SeqCst) {
                return Err(self.injected_failure());
            }
            #[allow(clippy::unwrap_used)] // Mutex poison is unrecoverable
            {
                *self.list.lock().unwrap() = list.clone();
            }
            Ok(())
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_empty() {
        let store = InMemoryTodoStore::new();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seeded_preserves_order_and_flags() {
        let store = InMemoryTodoStore::seeded([("First", true), ("Second", false)]);

        let list = store.load().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().name, "First");
        assert!(list.get(0).unwrap().done);
        assert!(!list.get(1).unwrap().done);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = InMemoryTodoStore::new();

        let mut list = store.load().await.unwrap();
        list.add("X");
        store.save(&list).await.unwrap();

        assert_eq!(store.load().await.unwrap(), list);
    }

    #[tokio::test]
    async fn injected_load_failure_fires_once() {
        let store = InMemoryTodoStore::new();
        store.fail_next_load();

        assert!(matches!(
            store.load().await.unwrap_err(),
            StoreError::Io { .. }
        ));
        // One-shot: the next load succeeds again
        assert!(store.load().await.is_ok());
    }

    #[tokio::test]
    async fn injected_save_failure_leaves_stored_list_unchanged() {
        let store = InMemoryTodoStore::seeded([("keep me", false)]);
        store.fail_next_save();

        let mut list = store.load().await.unwrap();
        list.add("lost");
        assert!(store.save(&list).await.is_err());

        let stored = store.snapshot();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored.get(0).unwrap().name, "keep me");
    }
}
