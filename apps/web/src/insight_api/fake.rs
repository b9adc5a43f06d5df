//! In-memory `InsightApi` for workflow and route tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use super::{InsightApi, UploadFile};
use crate::errors::ClientError;
use crate::models::insight::{Insight, InsightList, InsightSummary, TopWord};

#[derive(Default)]
pub struct FakeInsightApi {
    pub stored: Mutex<Vec<Insight>>,
    /// When set, every call fails with this status and detail.
    pub failure: Mutex<Option<(u16, String)>>,
    /// When set, every call waits for a permit before answering.
    pub gate: Option<Arc<Notify>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeInsightApi {
    pub fn with_insights(insights: Vec<Insight>) -> Self {
        Self {
            stored: Mutex::new(insights),
            ..Default::default()
        }
    }

    pub fn failing(status: u16, detail: &str) -> Self {
        Self {
            failure: Mutex::new(Some((status, detail.to_string()))),
            ..Default::default()
        }
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, call: String) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match self.failure.lock().unwrap().clone() {
            Some((status, message)) => Err(ClientError::Request { status, message }),
            None => Ok(()),
        }
    }
}

pub fn sample_insight(id: &str, filename: &str) -> Insight {
    Insight {
        id: id.to_string(),
        filename: filename.to_string(),
        uploaded_at: "2024-03-05T14:07:09Z".to_string(),
        summary_type: "ai".to_string(),
        summary: format!("Summary of {filename}"),
        top_words: vec![TopWord("rust".into(), 4), TopWord("async".into(), 2)],
        text_excerpt: "Jane Doe, Engineer".to_string(),
    }
}

#[async_trait]
impl InsightApi for FakeInsightApi {
    async fn upload(&self, file: UploadFile) -> Result<Insight, ClientError> {
        self.enter(format!("upload:{}", file.filename)).await?;
        let mut stored = self.stored.lock().unwrap();
        let insight = sample_insight(&format!("u{}", stored.len() + 1), &file.filename);
        stored.insert(0, insight.clone());
        Ok(insight)
    }

    async fn list(&self) -> Result<InsightList, ClientError> {
        self.enter("list".to_string()).await?;
        let items = self
            .stored
            .lock()
            .unwrap()
            .iter()
            .map(|i| InsightSummary {
                id: i.id.clone(),
                filename: i.filename.clone(),
                uploaded_at: i.uploaded_at.clone(),
                summary_type: i.summary_type.clone(),
            })
            .collect();
        Ok(InsightList { items })
    }

    async fn get(&self, id: &str) -> Result<Insight, ClientError> {
        self.enter(format!("get:{id}")).await?;
        self.stored
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| ClientError::Request {
                status: 404,
                message: "Document not found".to_string(),
            })
    }
}
