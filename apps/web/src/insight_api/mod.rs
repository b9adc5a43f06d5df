//! Insight API: the only place the client talks to the insight backend.
//!
//! Workflows depend on the `InsightApi` trait; `HttpInsightApi` is the
//! production backend, swapped for an in-memory fake in tests.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::ClientError;
use crate::models::insight::{Insight, InsightList};

pub mod http;

#[cfg(test)]
pub mod fake;

pub use http::HttpInsightApi;

/// Backend address used when `INSIGHT_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// A file picked by the user, ready to be sent as the `file` multipart field.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[async_trait]
pub trait InsightApi: Send + Sync {
    /// POST /upload-resume
    async fn upload(&self, file: UploadFile) -> Result<Insight, ClientError>;

    /// GET /insights
    async fn list(&self) -> Result<InsightList, ClientError>;

    /// GET /insights?id=<id>
    async fn get(&self, id: &str) -> Result<Insight, ClientError>;
}
