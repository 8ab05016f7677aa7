//! The write actions: toggle an item, append an item.
//!
//! Both follow the same linear shape (load, mutate, save, redirect back to
//! the list view) and both must leave the stored file intact when the
//! input is invalid.

use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;

use crate::state::AppState;
use crate::WebResult;

/// Form payload for `POST /toggle`.
///
/// The `id` is kept as raw text so an unparseable value can be recovered
/// from instead of being rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    /// Zero-based position of the item to toggle.
    pub id: String,
}

/// Form payload for `POST /add`.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    /// Label for the new item. May be empty; accepted as-is.
    #[serde(default)]
    pub new_todo: String,
}

/// Flips the done flag of the item at the submitted position.
///
/// Invalid input, an `id` that does not parse or is out of range, must
/// not corrupt the stored file: the request logs a warning, skips the save,
/// and redirects back to the list unchanged.
///
/// # Endpoint
///
/// ```text
/// POST /toggle   (form field: id)
/// ```
///
/// # Errors
///
/// Returns an `AppError` (500) when the list cannot be loaded or the
/// toggled list cannot be saved.
pub async fn toggle_todo(
    State(state): State<AppState>,
    Form(form): Form<ToggleForm>,
) -> WebResult<Redirect> {
    let Ok(index) = form.id.parse::<usize>() else {
        tracing::warn!(id = %form.id, "ignoring toggle with unparseable id");
        return Ok(Redirect::to("/"));
    };

    let mut list = state.store.load().await?;
    match list.toggle(index) {
        Ok(()) => state.store.save(&list).await?,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring toggle with out-of-range id");
        }
    }

    Ok(Redirect::to("/"))
}

/// Appends a new item with the submitted name and redirects to the list.
///
/// Empty names are accepted; the item is created with `done = false` at the
/// end of the sequence.
///
/// # Endpoint
///
/// ```text
/// POST /add   (form field: new_todo)
/// ```
///
/// # Errors
///
/// Returns an `AppError` (500) when the list cannot be loaded or the grown
/// list cannot be saved.
pub async fn add_todo(
    State(state): State<AppState>,
    Form(form): Form<AddForm>,
) -> WebResult<Redirect> {
    let mut list = state.store.load().await?;
    list.add(form.new_todo);
    state.store.save(&list).await?;

    Ok(Redirect::to("/"))
}
