//! Request-level error type for the relay API.

use axum::http::StatusCode;
use thiserror::Error;

use crate::provider::ProviderError;

/// Everything that can go wrong while serving a transcription request.
///
/// The display string doubles as the `error` field of the JSON body the
/// client sees, so variants spell out exactly what the dashboard should show.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Video URL is required")]
    MissingVideoUrl,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl RelayError {
    /// HTTP status the error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingVideoUrl => StatusCode::BAD_REQUEST,
            RelayError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
