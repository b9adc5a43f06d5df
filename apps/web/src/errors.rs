use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure of a single call to the insight backend.
///
/// `Display` yields only the human-facing message so it can be dropped
/// straight into an inline error line.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response. `message` is the backend's `detail` when present.
    #[error("{message}")]
    Request { status: u16, message: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of a rejected request; `None` when no response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Request { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            ClientError::Parse(_) => None,
        }
    }
}

/// Errors on the browser-facing surface.
/// Backend and upload failures never reach here; workflows render them inline instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
