//! The read view: render the current list.

use axum::extract::State;
use axum::response::Html;

use crate::render;
use crate::state::AppState;
use crate::WebResult;

/// Renders the list view.
///
/// Loads the full list from the store and renders one row per item in
/// sequence order. A storage failure surfaces as an error page rather than
/// a blank response.
///
/// # Endpoint
///
/// ```text
/// GET /
/// ```
///
/// # Errors
///
/// Returns an `AppError` (500) when the backing file cannot be read or
/// parsed.
pub async fn show_list(State(state): State<AppState>) -> WebResult<Html<String>> {
    let list = state.store.load().await?;
    Ok(Html(render::list_page(&list)))
}
