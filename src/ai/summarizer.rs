use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Serialize)]
struct SummarizeRequest {
    url: String,
}

#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary: String,
}

/// Error payload shape of the summarization backend: a human-readable
/// `detail` field alongside the HTTP status.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    detail: Option<String>,
}

/// Client for the summarization backend. The endpoint is opaque: it accepts
/// a video URL and returns the summary text, nothing more.
pub struct SummarizerClient {
    client: Client,
    endpoint: String,
}

impl SummarizerClient {
    pub fn new(endpoint: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");
        Self { client, endpoint }
    }

    pub async fn summarize(&self, url: &str) -> Result<String> {
        let request = SummarizeRequest {
            url: url.to_string(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(AppError::Summarizer(error_detail(status.as_u16(), &error_text)));
        }

        let payload: SummarizeResponse = response.json().await?;
        Ok(payload.summary)
    }
}

/// Prefer the backend's `detail` message; fall back to the raw body, then to
/// the bare status code.
fn error_detail(status: u16, body: &str) -> String {
    if let Ok(ErrorPayload { detail: Some(detail) }) = serde_json::from_str::<ErrorPayload>(body) {
        return detail;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("server returned status {}", status)
    } else {
        trimmed.to_string()
    }
}
