use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the video insights relay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Transcription provider settings
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Cross-origin access policy
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API (empty or "*" = any origin)
    pub allowed_origins: Vec<String>,

    /// Send Access-Control-Allow-Credentials on responses
    pub allow_credentials: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Endpoint of the transcription service
    pub endpoint: String,

    /// Bearer token for the transcription service
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl CorsConfig {
    /// True when any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Config {
    /// Load configuration from file, falling back to environment variables
    pub fn load() -> Result<Self> {
        let config_paths = ["vid-insights.toml", "config/vid-insights.toml"];

        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str(&config_str) {
                    Ok(config) => {
                        tracing::info!("📄 Loaded configuration from: {}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        Self::from_env()
    }

    /// Load configuration from an explicit file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Cannot read config file {}: {}", path.display(), e))?;
        let config = toml::from_str(&config_str)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

        tracing::info!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        let port = std::env::var("VID_INSIGHTS_PORT")
            .map_err(|_| anyhow!("Missing required VID_INSIGHTS_PORT in environment variables"))?;
        config.server.port = port
            .parse()
            .map_err(|_| anyhow!("VID_INSIGHTS_PORT is not a valid port: {}", port))?;

        config.provider.endpoint = std::env::var("VID_INSIGHTS_PROVIDER_URL").map_err(|_| {
            anyhow!("Missing required VID_INSIGHTS_PROVIDER_URL in environment variables")
        })?;

        if let Ok(origins) = std::env::var("VID_INSIGHTS_CORS_ORIGINS") {
            config.server.cors.allowed_origins = origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect();
        }

        if let Ok(credentials) = std::env::var("VID_INSIGHTS_CORS_CREDENTIALS") {
            config.server.cors.allow_credentials = credentials.parse().unwrap_or(false);
        }

        if let Ok(api_key) = std::env::var("VID_INSIGHTS_PROVIDER_KEY") {
            config.provider.api_key = Some(api_key);
        }

        if let Ok(timeout) = std::env::var("VID_INSIGHTS_PROVIDER_TIMEOUT") {
            config.provider.timeout_seconds = timeout.parse().unwrap_or(600);
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow!("server port must be greater than 0"));
        }

        if self.provider.endpoint.is_empty() {
            return Err(anyhow!("provider endpoint must not be empty"));
        }

        if self.provider.timeout_seconds == 0 {
            return Err(anyhow!("provider timeout must be greater than 0"));
        }

        // tower-http refuses this combination when building the CORS layer, so
        // catch it here where the message can point at the config.
        if self.server.cors.allow_credentials && self.server.cors.allows_any_origin() {
            return Err(anyhow!(
                "CORS credentials require an explicit origin list, not a wildcard"
            ));
        }

        tracing::info!("✅ Configuration validation passed");
        Ok(())
    }

    /// Get runtime configuration summary
    pub fn summary(&self) -> String {
        let origins = if self.server.cors.allows_any_origin() {
            "any".to_string()
        } else {
            self.server.cors.allowed_origins.join(", ")
        };

        format!(
            "Video Insights Relay Configuration:\n\
            - Port: {}\n\
            - Allowed Origins: {}\n\
            - CORS Credentials: {}\n\
            - Provider Endpoint: {}\n\
            - Provider Timeout: {}s",
            self.server.port,
            origins,
            self.server.cors.allow_credentials,
            self.provider.endpoint,
            self.provider.timeout_seconds
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 5000,
                cors: CorsConfig {
                    allowed_origins: Vec::new(),
                    allow_credentials: false,
                },
            },
            provider: ProviderConfig {
                endpoint: "http://localhost:8000/transcribe".to_string(),
                api_key: None,
                timeout_seconds: 600, // Transcribing a long video takes a while
            },
        }
    }
}

/// Configuration builder for programmatic config creation
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.config.server.cors.allowed_origins = origins;
        self
    }

    pub fn with_credentials(mut self, enable: bool) -> Self {
        self.config.server.cors.allow_credentials = enable;
        self
    }

    pub fn with_provider_endpoint(mut self, endpoint: String) -> Self {
        self.config.provider.endpoint = endpoint;
        self
    }

    pub fn with_provider_key(mut self, api_key: String) -> Self {
        self.config.provider.api_key = Some(api_key);
        self
    }

    pub fn with_provider_timeout(mut self, seconds: u64) -> Self {
        self.config.provider.timeout_seconds = seconds;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
