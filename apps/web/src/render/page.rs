use crate::client::{Tab, ViewState};

/// Re-polls the page while a backend call is still in flight.
const POLL_WHILE_PENDING: &str = r#"<meta http-equiv="refresh" content="1">"#;

const SCROLL_TO_TOP: &str =
    r#"<script>window.scrollTo({ top: 0, behavior: "smooth" });</script>"#;

fn tab_button(tab: Tab, active: Tab) -> String {
    let class = if tab == active { "tab active" } else { "tab" };
    format!(
        r#"<form method="post" action="/tabs/{name}"><button id="tab-{name}" class="{class}" type="submit">{label}</button></form>"#,
        name = tab.as_str(),
        label = tab.label(),
    )
}

fn visibility(tab: Tab, active: Tab) -> &'static str {
    if tab == active {
        ""
    } else {
        r#" style="display:none""#
    }
}

/// Renders the whole two-tab page from the current view state.
/// Panel contents in `ViewState` are already-escaped fragments.
pub fn render_page(view: &ViewState) -> String {
    let active = view.active_tab;
    let result = match &view.result {
        Some(html) => format!(r#"<div id="result" style="display:block">{html}</div>"#),
        None => r#"<div id="result" style="display:none"></div>"#.to_string(),
    };
    let scroll = if view.scroll_to_top { SCROLL_TO_TOP } else { "" };
    let poll = if view.pending > 0 { POLL_WHILE_PENDING } else { "" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  {poll}
  <title>Resume Insights</title>
</head>
<body>
  <nav class="tabs">
    {upload_tab}
    {history_tab}
  </nav>
  <section id="upload-section"{upload_visibility}>
    <form id="upload-form" method="post" action="/upload" enctype="multipart/form-data">
      <input id="pdf-file" type="file" name="file" accept="application/pdf">
      <button type="submit">Upload</button>
    </form>
    {result}
  </section>
  <section id="history-section"{history_visibility}>
    <form method="post" action="/history/refresh"><button type="submit">Refresh</button></form>
    <div id="history-list">{history}</div>
  </section>
  {scroll}
</body>
</html>
"#,
        upload_tab = tab_button(Tab::Upload, active),
        history_tab = tab_button(Tab::History, active),
        upload_visibility = visibility(Tab::Upload, active),
        history_visibility = visibility(Tab::History, active),
        history = view.history,
    )
}
