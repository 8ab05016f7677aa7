//! Axum web front end for the ticklist to-do service.
//!
//! This crate is the thin adapter between HTTP and the `TodoStore` contract
//! from `ticklist-core`. Every request is one linear pass over the store:
//!
//! ```text
//! GET  /        load → render list view
//! POST /toggle  load → toggle(id) → save → 303 redirect to /
//! POST /add     load → add(new_todo) → save → 303 redirect to /
//! GET  /health  liveness probe
//! ```
//!
//! The list view renders each item as `[X]`/`[ ]` plus its escaped name in
//! sequence order, followed by a form for submitting a new item. All
//! user-supplied text is HTML-escaped before embedding.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod handlers;
pub mod render;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;

/// Builds the application router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::list::show_list))
        .route("/toggle", post(handlers::todos::toggle_todo))
        .route("/add", post(handlers::todos::add_todo))
        .route("/health", get(handlers::health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
