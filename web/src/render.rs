//! HTML rendering for the list view.
//!
//! One page, no templating engine: the markup is small enough to build by
//! hand, and keeping it inline makes the escaping rule auditable. Item
//! names are untrusted user input and MUST pass through [`escape_html`]
//! before being embedded.

use axum::http::StatusCode;
use std::fmt::Write;
use ticklist_core::TodoList;

/// Escapes text for safe embedding in HTML element content and attributes.
///
/// Covers the five standard entities (`&`, `<`, `>`, `"`, `'`).
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the list view: one row per item in sequence order, then the
/// add form.
///
/// Each row is a toggle form carrying the item's zero-based position in a
/// hidden `id` field, with the submit button labelled `[X]` when done and
/// `[ ]` when pending, followed by the escaped item name.
#[must_use]
pub fn list_page(list: &TodoList) -> String {
    let mut rows = String::new();
    for (index, item) in list.iter().enumerate() {
        let marker = if item.done { "X" } else { " " };
        let name = escape_html(&item.name);
        // fmt::Write to a String is infallible
        let _ = write!(
            rows,
            concat!(
                "\t\t\t<div class=\"row\">\n",
                "\t\t\t\t<form action=\"/toggle\" method=\"post\">\n",
                "\t\t\t\t\t<input type=\"hidden\" name=\"id\" value=\"{index}\">\n",
                "\t\t\t\t\t<button type=\"submit\">[{marker}]</button>\n",
                "\t\t\t\t</form>\n",
                "\t\t\t\t<span>{name}</span>\n",
                "\t\t\t</div>\n",
            ),
            index = index,
            marker = marker,
            name = name,
        );
    }

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "\t<head>\n",
            "\t\t<meta charset=\"utf-8\">\n",
            "\t\t<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "\t\t<title>To do</title>\n",
            "\t\t<link rel=\"stylesheet\" href=\"https://cdnjs.cloudflare.com/ajax/libs/skeleton/2.0.1/skeleton.min.css\">\n",
            "\t</head>\n",
            "\t<body>\n",
            "\t\t<h1>To Do</h1>\n",
            "\t\t<div class=\"container\">\n",
            "{rows}",
            "\t\t</div>\n",
            "\t\t<form action=\"/add\" method=\"post\">\n",
            "\t\t\t<input type=\"text\" name=\"new_todo\">\n",
            "\t\t\t<button type=\"submit\">Add new To-Do</button>\n",
            "\t\t</form>\n",
            "\t</body>\n",
            "</html>\n",
        ),
        rows = rows,
    )
}

/// Renders a minimal error page.
///
/// Shown instead of the list view when storage fails; carries only the
/// user-facing message, never internal detail.
#[must_use]
pub fn error_page(status: StatusCode, message: &str) -> String {
    let message = escape_html(message);
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "\t<head>\n",
            "\t\t<meta charset=\"utf-8\">\n",
            "\t\t<title>Error</title>\n",
            "\t</head>\n",
            "\t<body>\n",
            "\t\t<h1>{status}</h1>\n",
            "\t\t<p>{message}</p>\n",
            "\t\t<p><a href=\"/\">Back to the list</a></p>\n",
            "\t</body>\n",
            "</html>\n",
        ),
        status = status,
        message = message,
    )
}
