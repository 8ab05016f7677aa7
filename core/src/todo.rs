//! Domain types for the to-do list.
//!
//! A [`TodoList`] is an ordered sequence of [`TodoItem`]s. The position of an
//! item in the sequence is its identity. There is no separate id field, and
//! nothing ever reorders the list: `add` appends, `toggle` mutates in place.
//!
//! The serde representation is the wire format other programs must match: a
//! JSON array of objects with exactly two fields, `name` and `done`, in
//! sequence order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single to-do item: a user-supplied label and a completion flag.
///
/// The name is untrusted free text (it may be empty, and must be escaped
/// before being embedded in HTML; see `ticklist-web`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// User-supplied label.
    pub name: String,
    /// Completion flag. Always `false` on creation.
    pub done: bool,
}

impl TodoItem {
    /// Creates a new, not-yet-done item.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
        }
    }
}

/// Errors from pure list mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Toggle index outside `[0, len)`.
    ///
    /// Recovered locally by callers: the request that produced it must not
    /// corrupt stored state, but it may no-op or report a user-visible
    /// failure.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// The requested zero-based position.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
}

/// An ordered sequence of to-do items.
///
/// Position in the sequence is the stable identifier used by [`toggle`]
/// (zero-based). Order is preserved across encode/decode cycles: the serde
/// form is `#[serde(transparent)]` over the inner `Vec`, so a list
/// round-trips losslessly through its JSON encoding.
///
/// [`toggle`]: TodoList::toggle
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Vec<TodoItem>);

impl TodoList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.0.get(index)
    }

    /// Iterates the items in sequence order.
    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.0.iter()
    }

    /// Appends a new item with the given name and `done = false`.
    ///
    /// Appending is the only way the list grows; existing positions are
    /// never disturbed. Does not persist; persistence is an explicit
    /// separate step through a [`TodoStore`].
    ///
    /// [`TodoStore`]: crate::store::TodoStore
    pub fn add(&mut self, name: impl Into<String>) {
        self.0.push(TodoItem::new(name));
    }

    /// Flips the `done` flag of the item at `index`.
    ///
    /// Toggling the same index twice restores the original flag; no other
    /// item is touched and the sequence order is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] when `index` is outside
    /// `[0, len)`. The list is left unmodified in that case.
    pub fn toggle(&mut self, index: usize) -> Result<(), ListError> {
        let len = self.0.len();
        let item = self
            .0
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, len })?;
        item.done = !item.done;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<TodoItem> for TodoList {
    fn from_iter<I: IntoIterator<Item = TodoItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
