//! File-backed `TodoStore` implementation.

use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use ticklist_core::{StoreError, TodoList, TodoStore};

/// A to-do store backed by a single JSON file.
///
/// The path is an explicit constructor argument; there is no default
/// location baked in here. The encoding is a JSON array of
/// `{"name": ..., "done": ...}` records in sequence order.
///
/// # Concurrency
///
/// No locking and no conflict detection: if two writers race, the later
/// save wins. The rename-based save only guarantees that readers never
/// observe a torn file.
#[derive(Clone, Debug)]
pub struct FileTodoStore {
    path: PathBuf,
}

impl FileTodoStore {
    /// Creates a store over the backing file at `path`.
    ///
    /// The file does not need to exist yet; the first load of an absent
    /// file yields an empty list and the first save creates it.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl TodoStore for FileTodoStore {
    fn load(&self) -> Pin<Box<dyn Future<Output = Result<TodoList, StoreError>> + Send + '_>> {
        Box::pin(async move {
            let bytes = match tokio::fs::read(&self.path).await {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    // Absence means "no to-dos yet"
                    tracing::debug!(path = %self.path.display(), "backing file absent, starting empty");
                    return Ok(TodoList::new());
                }
                Err(e) => return Err(self.io_error(e)),
            };

            let list: TodoList =
                serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
                    path: self.path.clone(),
                    detail: e.to_string(),
                })?;

            tracing::debug!(path = %self.path.display(), items = list.len(), "loaded to-do list");
            Ok(list)
        })
    }

    fn save<'a>(
        &'a self,
        list: &'a TodoList,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let bytes = serde_json::to_vec(list).map_err(|e| {
                self.io_error(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            })?;
            let items = list.len();

            // Write-then-rename: the temp file must live in the destination
            // directory so the final rename stays on one filesystem.
            let path = self.path.clone();
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };

            tokio::task::spawn_blocking(move || -> Result<(), StoreError> {
                let io_error = |source: std::io::Error| StoreError::Io {
                    path: path.clone(),
                    source,
                };

                let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(io_error)?;
                tmp.write_all(&bytes).map_err(io_error)?;
                tmp.as_file().sync_all().map_err(io_error)?;
                tmp.persist(&path).map_err(|e| io_error(e.error))?;
                Ok(())
            })
            .await
            .map_err(|e| self.io_error(std::io::Error::other(e)))??;

            tracing::debug!(path = %self.path.display(), items, "saved to-do list");
            Ok(())
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> FileTodoStore {
        FileTodoStore::new(dir.join("todos.json"))
    }

    #[tokio::test]
    async fn absent_file_loads_as_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let list = store.load().await.unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let mut list = TodoList::new();
        list.add("First");
        list.add("café ☕ & <markup>");
        list.toggle(0).unwrap();

        store.save(&list).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, list);
    }

    #[tokio::test]
    async fn append_grows_at_the_end_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let mut list = TodoList::new();
        list.add("First");
        list.add("Second");
        store.save(&list).await.unwrap();

        let mut reloaded = store.load().await.unwrap();
        reloaded.add("X");
        store.save(&reloaded).await.unwrap();

        let final_list = store.load().await.unwrap();
        assert_eq!(final_list.len(), 3);
        assert_eq!(final_list.get(0).unwrap().name, "First");
        assert_eq!(final_list.get(1).unwrap().name, "Second");
        let appended = final_list.get(2).unwrap();
        assert_eq!(appended.name, "X");
        assert!(!appended.done);
    }

    #[tokio::test]
    async fn malformed_file_is_a_corrupt_error_and_stays_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        tokio::fs::write(store.path(), b"{ not json").await.unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));

        // The failed load must not have rewritten the file
        let bytes = tokio::fs::read(store.path()).await.unwrap();
        assert_eq!(bytes, b"{ not json");
    }

    #[tokio::test]
    async fn wrong_shape_is_a_corrupt_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        // Valid JSON, wrong shape: records must carry name + done
        tokio::fs::write(store.path(), br#"[{"title":"First"}]"#)
            .await
            .unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn unreadable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the backing path cannot be read as a file
        let store = FileTodoStore::new(dir.path());

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[tokio::test]
    async fn save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let mut first = TodoList::new();
        first.add("old");
        store.save(&first).await.unwrap();

        let mut second = TodoList::new();
        second.add("new");
        store.save(&second).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, second);
    }

    #[tokio::test]
    async fn save_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let mut list = TodoList::new();
        list.add("only");
        store.save(&list).await.unwrap();
        store.save(&list).await.unwrap();

        let mut entries = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect::<Vec<_>>();
        entries.sort();
        assert_eq!(entries, vec![std::ffi::OsString::from("todos.json")]);
    }

    #[tokio::test]
    async fn last_writer_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        // Two writers start from the same loaded state
        let base = store.load().await.unwrap();
        let mut writer_a = base.clone();
        writer_a.add("from A");
        let mut writer_b = base;
        writer_b.add("from B");

        store.save(&writer_a).await.unwrap();
        store.save(&writer_b).await.unwrap();

        // The later save silently discards the earlier one
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, writer_b);
    }
}
