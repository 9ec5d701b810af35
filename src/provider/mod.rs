//! Transcription provider abstraction.
//!
//! The relay never analyzes video itself. It hands the URL to an upstream
//! provider and passes the provider's analysis back out. The trait keeps the
//! HTTP client swappable so tests can drive the API with a scripted fake.

pub mod remote;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::sentiment::SentimentResult;

/// Errors raised while talking to the transcription provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("invalid provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Transcription block of the provider response.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionPayload {
    /// Free-form summary, passed through untouched.
    #[serde(default)]
    pub summary: Value,
    /// Per-segment sentiment labels used to build the chart timeline.
    pub sentiment_analysis_results: Vec<SentimentResult>,
}

/// Full provider response for one video.
///
/// Only the transcription block is interpreted here. The analysis and chart
/// fields are opaque JSON the dashboard renders as-is, so they stay `Value`
/// and default to null when the provider omits them.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderResponse {
    pub transcription: TranscriptionPayload,
    #[serde(default)]
    pub analysis: Value,
    #[serde(default, rename = "lineChartAnalysis")]
    pub line_chart_analysis: Value,
    #[serde(default, rename = "pieChartAnalysis")]
    pub pie_chart_analysis: Value,
}

/// Trait for transcription providers.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    /// Submit a video URL and wait for the full analysis.
    async fn transcribe(&self, video_url: &str) -> Result<ProviderResponse, ProviderError>;

    /// Short provider name for log lines.
    fn name(&self) -> &str;
}
