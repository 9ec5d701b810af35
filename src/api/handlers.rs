//! API request handlers

use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::RelayError;
use crate::provider::TranscriptionProvider;
use crate::sentiment;

use super::models::{ResponseEnvelope, TranscribeRequest};

/// Handle transcription requests
///
/// Validates the URL before anything else so a bad request never reaches the
/// provider, then reshapes the provider's analysis into the envelope the
/// dashboard renders.
pub async fn transcribe(
    provider: &Arc<dyn TranscriptionProvider>,
    request: TranscribeRequest,
) -> Result<ResponseEnvelope, RelayError> {
    let video_url = match request.video_url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => return Err(RelayError::MissingVideoUrl),
    };

    info!(
        "🎬 Transcription requested for {} (provider: {})",
        video_url,
        provider.name()
    );

    let response = provider
        .transcribe(video_url)
        .await
        .inspect_err(|e| error!("Provider call failed for {}: {}", video_url, e))?;

    let sentiment_data =
        sentiment::score_timeline(&response.transcription.sentiment_analysis_results);

    info!(
        "✅ Analysis complete for {} ({} sentiment points)",
        video_url,
        sentiment_data.len()
    );

    Ok(ResponseEnvelope {
        summary_data: response.transcription.summary,
        sentiment_data,
        ai_analysis_data: response.analysis,
        line_chart_analysis: response.line_chart_analysis,
        pie_chart_analysis: response.pie_chart_analysis,
    })
}

/// Handle health check requests
pub async fn health_check() -> Result<Value> {
    Ok(serde_json::json!({
        "status": "healthy",
        "service": "vid-insights",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
