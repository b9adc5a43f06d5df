use serde::{Deserialize, Deserializer, Serialize};

/// One processed document as returned by the insight backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub filename: String,
    pub uploaded_at: String,
    pub summary_type: String,
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_words: Vec<TopWord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text_excerpt: String,
}

/// A `[word, count]` pair. Order within `top_words` is the backend's ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopWord(pub String, pub u64);

/// The subset of an insight shown as a history row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSummary {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub filename: String,
    pub uploaded_at: String,
    pub summary_type: String,
}

/// Body of `GET /insights`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<InsightSummary>,
}

/// Error body of a non-2xx backend response. `detail` is only honoured when it is a string.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .filter(|d| !d.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identifiers are opaque: accept strings or bare numbers and keep the text form.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
