//! Insight Client: tab controller plus the upload, history and view workflows.
//!
//! `ViewState` is the in-memory page. A workflow writes its placeholder, then
//! spawns the backend call and returns its handle, so the caller can answer
//! the browser before the backend does. Concurrent actions are not sequenced:
//! whichever response lands last is what the page shows.

use std::{fmt, str::FromStr, sync::Arc};

use tokio::{sync::RwLock, task::JoinHandle};
use tracing::{info, warn};

use crate::insight_api::{InsightApi, UploadFile};
use crate::render::{
    render_error, render_history, render_insight, render_page, LOADING_PLACEHOLDER,
    UPLOADING_PLACEHOLDER,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Upload,
    History,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Upload => "upload",
            Tab::History => "history",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Upload => "Upload",
            Tab::History => "History",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upload" => Ok(Tab::Upload),
            "history" => Ok(Tab::History),
            other => Err(format!("Unknown tab '{other}'")),
        }
    }
}

/// Everything the page shows. Panel strings are rendered, escaped HTML.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub active_tab: Tab,
    /// Upload result panel; `None` keeps it hidden.
    pub result: Option<String>,
    pub history: String,
    /// Emitted once with the next page render, then cleared.
    pub scroll_to_top: bool,
    /// Backend calls still in flight. The page polls for updates while non-zero.
    pub pending: usize,
}

#[derive(Clone)]
pub struct InsightClient {
    api: Arc<dyn InsightApi>,
    view: Arc<RwLock<ViewState>>,
}

impl InsightClient {
    pub fn new(api: Arc<dyn InsightApi>) -> Self {
        Self {
            api,
            view: Arc::new(RwLock::new(ViewState::default())),
        }
    }

    pub async fn snapshot(&self) -> ViewState {
        self.view.read().await.clone()
    }

    /// Renders the page and consumes any pending scroll request.
    pub async fn render_page(&self) -> String {
        let mut view = self.view.write().await;
        let html = render_page(&view);
        view.scroll_to_top = false;
        html
    }

    /// Activates `tab` immediately. Switching to history also starts a refresh,
    /// whose handle is returned.
    pub async fn select_tab(&self, tab: Tab) -> Option<JoinHandle<()>> {
        self.view.write().await.active_tab = tab;
        match tab {
            Tab::History => Some(self.load_history().await),
            Tab::Upload => None,
        }
    }

    /// Shows the upload placeholder and starts the upload. `None` is a no-op.
    pub async fn submit(&self, file: Option<UploadFile>) -> Option<JoinHandle<()>> {
        let file = file?;

        info!("Uploading {} ({} bytes)", file.filename, file.bytes.len());
        {
            let mut view = self.view.write().await;
            view.result = Some(UPLOADING_PLACEHOLDER.to_string());
            view.pending += 1;
        }

        let client = self.clone();
        Some(tokio::spawn(async move {
            let html = match client.api.upload(file).await {
                Ok(insight) => {
                    info!("Upload produced insight {}", insight.id);
                    render_insight(&insight)
                }
                Err(e) => {
                    warn!(status = ?e.status(), "Upload failed: {e}");
                    render_error("Error", &e.to_string())
                }
            };
            client.finish(move |view| view.result = Some(html)).await;
        }))
    }

    /// Renders an upload that never reached the backend, e.g. an unreadable form body.
    pub async fn reject_upload(&self, message: &str) {
        warn!("Upload rejected: {message}");
        self.view.write().await.result = Some(render_error("Error", message));
    }

    /// Shows the loading placeholder and starts fetching the history list.
    pub async fn load_history(&self) -> JoinHandle<()> {
        {
            let mut view = self.view.write().await;
            view.history = LOADING_PLACEHOLDER.to_string();
            view.pending += 1;
        }

        let client = self.clone();
        tokio::spawn(async move {
            let html = match client.api.list().await {
                Ok(list) => {
                    info!("Loaded {} history items", list.items.len());
                    render_history(&list.items)
                }
                Err(e) => {
                    warn!(status = ?e.status(), "Failed to load history: {e}");
                    render_error("Failed to load history", &e.to_string())
                }
            };
            client.finish(move |view| view.history = html).await;
        })
    }

    /// Starts fetching a past insight. On success it lands in the upload panel
    /// with a scroll to the top; on failure the error goes to the history panel
    /// and the tab stays put.
    pub async fn view(&self, id: &str) -> JoinHandle<()> {
        info!("Viewing insight {id}");
        self.view.write().await.pending += 1;

        let client = self.clone();
        let id = id.to_string();
        tokio::spawn(async move {
            match client.api.get(&id).await {
                Ok(insight) => {
                    let html = render_insight(&insight);
                    client
                        .finish(move |view| {
                            view.active_tab = Tab::Upload;
                            view.result = Some(html);
                            view.scroll_to_top = true;
                        })
                        .await;
                }
                Err(e) => {
                    warn!(status = ?e.status(), "Failed to load insight {id}: {e}");
                    let html = render_error("Failed to load history", &e.to_string());
                    client.finish(move |view| view.history = html).await;
                }
            }
        })
    }

    async fn finish<F>(&self, apply: F)
    where
        F: FnOnce(&mut ViewState),
    {
        let mut view = self.view.write().await;
        apply(&mut view);
        view.pending = view.pending.saturating_sub(1);
    }
}
