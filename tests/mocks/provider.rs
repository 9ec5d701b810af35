use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use vid_insights::provider::{
    ProviderError, ProviderResponse, TranscriptionPayload, TranscriptionProvider,
};

/// Scripted provider for driving the router in tests.
///
/// Records every URL it is asked to transcribe. A failing mock surfaces the
/// configured message as a 502 API error.
#[derive(Clone)]
pub struct MockProvider {
    pub response: ProviderResponse,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockProvider {
    pub fn new(response: ProviderResponse) -> Self {
        Self {
            response,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            response: empty_response(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl TranscriptionProvider for MockProvider {
    async fn transcribe(&self, video_url: &str) -> Result<ProviderResponse, ProviderError> {
        self.calls.lock().unwrap().push(video_url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(ProviderError::Api {
                status: 502,
                message: msg.clone(),
            });
        }
        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn empty_response() -> ProviderResponse {
    ProviderResponse {
        transcription: TranscriptionPayload {
            summary: Value::Null,
            sentiment_analysis_results: Vec::new(),
        },
        analysis: Value::Null,
        line_chart_analysis: Value::Null,
        pie_chart_analysis: Value::Null,
    }
}
