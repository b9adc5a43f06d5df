use anyhow::{Context, Result};

use crate::insight_api::DEFAULT_API_BASE;

const DEFAULT_MAX_UPLOAD_MB: usize = 25;

/// Client configuration loaded from environment variables.
/// Every value has a default so the client starts against a local backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub port: u16,
    pub rust_log: String,
    /// Request body cap for `/upload`, well above typical resume PDFs.
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_base =
            std::env::var("INSIGHT_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Config {
            api_base: normalize_base(&api_base)?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_MB")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_MB.to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_MB must be a whole number of megabytes")?
                * 1024
                * 1024,
        })
    }
}

/// Trims whitespace and trailing slashes so endpoint paths can be appended directly.
fn normalize_base(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/');
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        anyhow::bail!("INSIGHT_API_BASE must be an http(s) URL, got '{raw}'");
    }
    Ok(base.to_string())
}
