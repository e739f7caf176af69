//! reqwest-backed analysis client

use super::traits::AnalysisClient;
use super::types::{AnalysisError, AnalyzeRequest, AnalyzeResponse, ErrorBody, GENERIC_FAILURE};
use crate::config::AppConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Talks to `POST {base_url}{analyze_path}`.
#[derive(Clone)]
pub struct HttpAnalysisClient {
    url: String,
    http: Client,
}

impl HttpAnalysisClient {
    pub fn new(base_url: &str, analyze_path: &str) -> Self {
        Self {
            url: build_url(base_url, analyze_path),
            http: Client::new(),
        }
    }

    /// Creates a client from application config, applying the request timeout
    /// when one is set.
    pub fn from_config(config: &AppConfig) -> Result<Self, AnalysisError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(AnalysisError::network)?;
        Ok(Self {
            url: build_url(&config.base_url, &config.analyze_path),
            http,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(&self, text: &str) -> Result<String, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyText);
        }

        info!(url = self.url.as_str(), chars = text.chars().count(), "Sending analysis request");

        let response = self
            .http
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&AnalyzeRequest { text })
            .send()
            .await
            .map_err(AnalysisError::network)?;

        let status = response.status();
        let body = response.bytes().await.map_err(AnalysisError::network)?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received analysis response");

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.error)
                .filter(|error| !error.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            warn!(status = status.as_u16(), error = message.as_str(), "Analysis request failed");
            return Err(AnalysisError::status(status, message));
        }

        let parsed: AnalyzeResponse = serde_json::from_slice(&body)
            .map_err(|e| AnalysisError::invalid_response(e.to_string()))?;
        parsed
            .analysis
            .ok_or_else(|| AnalysisError::invalid_response("missing 'analysis' field"))
    }
}

/// Join a base URL and a path with exactly one slash between them.
pub fn build_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
