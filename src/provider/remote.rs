//! HTTP-backed provider client.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use super::{ProviderError, ProviderResponse, TranscriptionProvider};
use crate::config::ProviderConfig;

/// Talks to the real transcription service over HTTP.
pub struct RemoteProvider {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl RemoteProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        // Transcribing a long video can take minutes
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }
}

#[async_trait]
impl TranscriptionProvider for RemoteProvider {
    async fn transcribe(&self, video_url: &str) -> Result<ProviderResponse, ProviderError> {
        debug!("Submitting video to provider at {}", self.endpoint);

        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "videoUrl": video_url }));

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let message = if text.is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                text
            };
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: ProviderResponse = serde_json::from_str(&body)?;

        Ok(parsed)
    }

    fn name(&self) -> &str {
        "remote"
    }
}
