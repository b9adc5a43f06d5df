use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{InsightApi, UploadFile};
use crate::errors::ClientError;
use crate::models::insight::{ErrorBody, Insight, InsightList};

const UPLOAD_FAILED: &str = "Upload failed";

/// `reqwest`-backed client for the insight backend.
/// No timeouts and no retries: a failed call is terminal for that user action.
#[derive(Clone)]
pub struct HttpInsightApi {
    client: Client,
    base: String,
}

impl HttpInsightApi {
    pub fn new(base: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("insight-web/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[async_trait]
impl InsightApi for HttpInsightApi {
    async fn upload(&self, file: UploadFile) -> Result<Insight, ClientError> {
        let size = file.bytes.len();
        let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.filename.clone());
        if let Some(content_type) = file.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }
        let form = Form::new().part("file", part);

        debug!("POST /upload-resume filename={} bytes={size}", file.filename);
        let response = self
            .client
            .post(self.url("/upload-resume"))
            .multipart(form)
            .send()
            .await?;

        decode(response, Some(UPLOAD_FAILED)).await
    }

    async fn list(&self) -> Result<InsightList, ClientError> {
        debug!("GET /insights");
        let response = self.client.get(self.url("/insights")).send().await?;
        decode(response, None).await
    }

    async fn get(&self, id: &str) -> Result<Insight, ClientError> {
        debug!("GET /insights?id={id}");
        let response = self
            .client
            .get(self.url("/insights"))
            .query(&[("id", id)])
            .send()
            .await?;
        decode(response, None).await
    }
}

/// Reads the body and either deserializes it or turns it into a `Request` error.
/// The error message is the backend's `detail` when it has one, else `fallback`,
/// else a generic status line.
async fn decode<T: DeserializeOwned>(
    response: Response,
    fallback: Option<&str>,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let detail = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message().map(str::to_string));
        let message = detail
            .or_else(|| fallback.map(str::to_string))
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
        debug!("Backend returned {status}: {message}");
        return Err(ClientError::Request {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_slice(&body)?)
}
