//! Server-rendered page for a [`PageView`].

use crate::presenter::{PageView, View};
use crate::templates;

/// Escape text for use in element content and double-quoted attributes.
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

/// Render the full document. Results markup is inserted as-is.
pub fn render_page(view: &PageView) -> String {
    let title = escape_html(&view.title());
    let status = escape_html(view.status());
    let status_class = if view.is_pulsing() { " status-pulsing" } else { "" };
    let disabled = if view.is_trigger_enabled() { "" } else { " disabled" };

    templates::render(
        templates::INDEX_PAGE,
        &[
            ("title", &title),
            ("status", &status),
            ("status_class", status_class),
            ("generate_disabled", disabled),
            ("result", view.results()),
        ],
    )
}
