//! Application state for Axum handlers.

use std::sync::Arc;
use ticklist_core::TodoStore;

/// Application state shared across all HTTP handlers.
///
/// Holds the one collaborator the handlers need: the to-do store. The
/// concrete store is chosen at process startup (file-backed in production,
/// in-memory in tests) and injected here; handlers only see the trait.
#[derive(Clone)]
pub struct AppState {
    /// The to-do store backing every request.
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    /// Creates state over the given store.
    #[must_use]
    pub const fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}
