//! API module for the video insights relay
//!
//! Provides the REST surface the dashboard talks to.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::provider::TranscriptionProvider;

pub mod handlers;
pub mod models;
pub mod server;

/// API server owning the configuration and the provider handle
pub struct ApiServer {
    config: Arc<Config>,
    provider: Arc<dyn TranscriptionProvider>,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(config: Arc<Config>, provider: Arc<dyn TranscriptionProvider>) -> Self {
        Self { config, provider }
    }

    /// Start the API server
    pub async fn start(self) -> Result<()> {
        info!("🚀 Starting API server on port {}", self.config.server.port);

        server::start_http_server(self.config, self.provider).await
    }
}
