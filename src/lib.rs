//! Video Insights Relay
//!
//! Thin HTTP service that forwards video URLs to an external
//! transcription/analysis provider, derives a cumulative sentiment timeline,
//! and reshapes the result into the envelope the insights dashboard renders.

pub mod api;
pub mod config;
pub mod error;
pub mod provider;
pub mod sentiment;

// Re-export main types for easy access
pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::RelayError;
pub use crate::provider::{ProviderError, ProviderResponse, TranscriptionProvider};
pub use crate::sentiment::{score_timeline, SentimentPoint, SentimentResult};
