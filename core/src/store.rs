//! Storage contract for the to-do list.
//!
//! This module defines the seam between the domain and durable storage. The
//! [`TodoStore`] trait is deliberately minimal: it can load the whole list
//! and save the whole list, nothing else. There is no partial update: a
//! save always rewrites the entire sequence, and a load always reconstructs
//! it from scratch.
//!
//! # Implementations
//!
//! - `FileTodoStore` (in `ticklist-file`): production implementation backed
//!   by a single JSON file
//! - `InMemoryTodoStore` (in `ticklist-testing`): fast, deterministic testing
//!
//! # Concurrency
//!
//! The contract assumes a single logical writer per operation. If two write
//! requests race, the later save wins and silently discards the earlier
//! writer's change (last-writer-wins, no merge). Implementations do not
//! lock, detect conflicts, or retry.

use crate::todo::TodoList;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file exists but cannot be parsed into a to-do list.
    ///
    /// This is surfaced to the caller rather than treated as an empty list:
    /// pretending the list is empty would overwrite the unreadable data on
    /// the next save.
    #[error("corrupt backing file {}: {detail}", path.display())]
    Corrupt {
        /// Path of the unreadable backing file.
        path: PathBuf,
        /// Decoder message describing why the contents did not parse.
        detail: String,
    },

    /// Filesystem failure while reading or writing the backing file.
    ///
    /// Fatal for the current request. A failed save must not leave a
    /// partially written backing file behind.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path of the backing file involved.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
}

/// Storage abstraction for a to-do list.
///
/// A store owns exactly one list and its durable encoding. Loading an absent
/// backing file is NOT an error; absence means "no to-dos yet" and yields
/// an empty list.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a store can be shared across
/// request handlers as `Arc<dyn TodoStore>`.
///
/// # Dyn Compatibility
///
/// This trait uses explicit `Pin<Box<dyn Future>>` returns instead of
/// `async fn` to enable trait object usage (`Arc<dyn TodoStore>`), which is
/// how the web layer holds its store.
pub trait TodoStore: Send + Sync {
    /// Loads the full list from the backing store.
    ///
    /// # Returns
    ///
    /// The decoded list in stored order. An absent backing file yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Corrupt`]: the backing file exists but does not parse
    /// - [`StoreError::Io`]: the backing file exists but cannot be read
    fn load(&self) -> Pin<Box<dyn Future<Output = Result<TodoList, StoreError>> + Send + '_>>;

    /// Serializes the full list and overwrites the backing store.
    ///
    /// The whole sequence is rewritten on every save; there is no
    /// partial-update protocol.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Io`]: the new contents could not be written. The
    ///   previous contents of the backing file remain intact.
    fn save<'a>(
        &'a self,
        list: &'a TodoList,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_error_display_names_the_file() {
        let error = StoreError::Corrupt {
            path: PathBuf::from("/data/todos.json"),
            detail: "expected value at line 1 column 1".to_string(),
        };

        let display = format!("{error}");
        assert!(display.contains("/data/todos.json"));
        assert!(display.contains("line 1 column 1"));
    }

    #[test]
    fn io_error_display_names_the_file() {
        let error = StoreError::Io {
            path: PathBuf::from("todos.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        let display = format!("{error}");
        assert!(display.contains("todos.json"));
        assert!(display.contains("denied"));
    }
}
