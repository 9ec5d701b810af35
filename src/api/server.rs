//! HTTP server implementation for the API

use anyhow::{anyhow, Result};
use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use super::{handlers, models::TranscribeRequest};
use crate::config::{Config, CorsConfig};
use crate::provider::TranscriptionProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn TranscriptionProvider>,
}

/// Build the relay router with state and middleware attached
pub fn build_router(config: &Config, provider: Arc<dyn TranscriptionProvider>) -> Result<Router> {
    let cors = cors_layer(&config.server.cors)?;

    let app_state = AppState { provider };

    let app = Router::new()
        .route("/transcribe", post(transcribe_handler))
        .route("/health", get(health_handler))
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    Ok(app)
}

/// Configure and start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    provider: Arc<dyn TranscriptionProvider>,
) -> Result<()> {
    let port = config.server.port;

    let app = build_router(&config, provider)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("🌐 API server listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Translate the CORS configuration into a tower-http layer
fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer> {
    let mut layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if cors.allows_any_origin() {
        layer = layer.allow_origin(Any);
    } else {
        let origins = cors
            .allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| anyhow!("Invalid CORS origin: {}", origin))
            })
            .collect::<Result<Vec<_>>>()?;
        layer = layer.allow_origin(AllowOrigin::list(origins));
    }

    if cors.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    Ok(layer)
}

/// Transcription handler
async fn transcribe_handler(
    State(state): State<AppState>,
    Json(request): Json<TranscribeRequest>,
) -> impl IntoResponse {
    match handlers::transcribe(&state.provider, request).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => {
            let status = e.status();
            (status, Json(serde_json::json!({"error": e.to_string()}))).into_response()
        }
    }
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    match handlers::health_check().await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => {
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            (status, Json(serde_json::json!({"error": e.to_string()}))).into_response()
        }
    }
}
