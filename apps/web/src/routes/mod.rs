pub mod health;
pub mod pages;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(pages::handle_index))
        .route("/health", get(health::health_handler))
        .route("/tabs/:tab", post(pages::handle_select_tab))
        .route("/upload", post(pages::handle_upload).layer(upload_limit))
        .route("/history/refresh", post(pages::handle_refresh_history))
        .route("/history/view", post(pages::handle_view))
        .with_state(state)
}
