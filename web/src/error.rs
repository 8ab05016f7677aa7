//! Error types for web handlers.
//!
//! Bridges domain errors to HTTP responses via Axum's `IntoResponse`. A
//! failed read renders a minimal error page rather than a blank crash page;
//! internal details stay in the log, never in the response body.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::fmt;
use ticklist_core::StoreError;

use crate::render;

/// Application error type for web handlers.
///
/// Wraps storage failures (and anything else a handler can hit) with an
/// HTTP status and a user-facing message. The internal source error is kept
/// for logging only.
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code.
    status: StatusCode,
    /// Error message (user-facing).
    message: String,
    /// Internal error (for logging, not exposed to the client).
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying error for logging.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// HTTP status of this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let message = match &err {
            StoreError::Corrupt { .. } => "The stored to-do list is unreadable",
            StoreError::Io { .. } => "The to-do list storage is unavailable",
        };
        Self::internal(message).with_source(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            if let Some(source) = &self.source {
                tracing::error!(
                    status = %self.status,
                    message = %self.message,
                    error = %source,
                    "request failed"
                );
            } else {
                tracing::error!(
                    status = %self.status,
                    message = %self.message,
                    "request failed"
                );
            }
        }

        let body = render::error_page(self.status, &self.message);
        (self.status, Html(body)).into_response()
    }
}
