//! API data models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sentiment::SentimentPoint;

/// Body of a `POST /transcribe` request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeRequest {
    /// Absent and null both land as `None`; the handler treats both, plus the
    /// empty string, as a missing URL.
    #[serde(default)]
    pub video_url: Option<String>,
}

/// Flattened analysis envelope returned to the dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub summary_data: Value,
    pub sentiment_data: Vec<SentimentPoint>,
    pub ai_analysis_data: Value,
    pub line_chart_analysis: Value,
    pub pie_chart_analysis: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_url_variants() {
        let absent: TranscribeRequest = serde_json::from_value(json!({})).unwrap();
        assert!(absent.video_url.is_none());

        let null: TranscribeRequest =
            serde_json::from_value(json!({ "videoUrl": null })).unwrap();
        assert!(null.video_url.is_none());

        let present: TranscribeRequest =
            serde_json::from_value(json!({ "videoUrl": "https://cdn.example.com/v.mp4" }))
                .unwrap();
        assert_eq!(
            present.video_url.as_deref(),
            Some("https://cdn.example.com/v.mp4")
        );
    }

    #[test]
    fn test_envelope_wire_field_names() {
        let envelope = ResponseEnvelope {
            summary_data: json!("short summary"),
            sentiment_data: vec![SentimentPoint {
                timestamp: 1.5,
                score: 1,
            }],
            ai_analysis_data: json!({ "tone": "upbeat" }),
            line_chart_analysis: Value::Null,
            pie_chart_analysis: Value::Null,
        };

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "summaryData": "short summary",
                "sentimentData": [{ "timestamp": 1.5, "score": 1 }],
                "aiAnalysisData": { "tone": "upbeat" },
                "lineChartAnalysis": null,
                "pieChartAnalysis": null
            })
        );
    }
}
