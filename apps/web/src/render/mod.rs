//! HTML rendering for the insight client.
//!
//! Every value that came from the backend or the user goes through
//! `escape_html` before it is interpolated into markup.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::models::insight::{Insight, InsightSummary, TopWord};

pub mod page;

pub use page::render_page;

pub const UPLOADING_PLACEHOLDER: &str = "<p>Uploading and processing...</p>";
pub const LOADING_PLACEHOLDER: &str = "<p>Loading...</p>";
pub const NO_HISTORY: &str = "<p>No history yet.</p>";

const ERROR_COLOR: &str = "#f87171";
const EMPTY_TOP_WORDS: &str = "—";
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Escapes `& < > " '` for safe use in element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats a backend timestamp as `M/D/YYYY, h:mm:ss AM` in UTC.
/// Timestamps without an offset are taken as UTC; anything unparseable is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc())
        });

    match parsed {
        Ok(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `word (count)` pairs joined by `, `, or an em-dash when there are none.
pub fn render_top_words(words: &[TopWord]) -> String {
    if words.is_empty() {
        return EMPTY_TOP_WORDS.to_string();
    }
    words
        .iter()
        .map(|TopWord(word, count)| format!("{} ({count})", escape_html(word)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Full insight card shown in the upload panel, used for fresh uploads and history views alike.
pub fn render_insight(insight: &Insight) -> String {
    format!(
        r#"
    <h3>{filename}</h3>
    <p class="small">Uploaded: {uploaded}</p>
    <p><b>Type:</b> {summary_type}</p>
    <div class="card"><b>Summary</b><div class="code">{summary}</div></div>
    <p><b>Top words:</b> {top_words}</p>
    <details>
      <summary>Text excerpt</summary>
      <div class="code">{excerpt}</div>
    </details>
  "#,
        filename = escape_html(&insight.filename),
        uploaded = escape_html(&format_timestamp(&insight.uploaded_at)),
        summary_type = escape_html(&insight.summary_type.to_uppercase()),
        summary = escape_html(&insight.summary),
        top_words = render_top_words(&insight.top_words),
        excerpt = escape_html(&insight.text_excerpt),
    )
}

pub fn render_history_item(item: &InsightSummary) -> String {
    format!(
        r#"
    <div class="item">
      <div><b>{filename}</b></div>
      <div class="small">{uploaded} • {summary_type}</div>
      <form method="post" action="/history/view">
        <input type="hidden" name="id" value="{id}">
        <button class="view-btn" type="submit">View</button>
      </form>
    </div>
  "#,
        filename = escape_html(&item.filename),
        uploaded = escape_html(&format_timestamp(&item.uploaded_at)),
        summary_type = escape_html(&item.summary_type.to_uppercase()),
        id = escape_html(&item.id),
    )
}

/// One row per item in the order given, or the empty-history message.
pub fn render_history(items: &[InsightSummary]) -> String {
    if items.is_empty() {
        return NO_HISTORY.to_string();
    }
    items.iter().map(render_history_item).collect()
}

/// Inline error line, e.g. `Error: bad format`.
pub fn render_error(prefix: &str, message: &str) -> String {
    format!(
        r#"<p style="color:{ERROR_COLOR}">{}: {}</p>"#,
        escape_html(prefix),
        escape_html(message)
    )
}
