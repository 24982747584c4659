// SPDX-License-Identifier: PMPL-1.0-or-later
//! HTTP API: upload an HTML file, receive its score in a JSON envelope.
//!
//! Routes:
//! - `POST /api/analyze-html` - multipart field `file`
//! - `GET  /api/health`
//!
//! Unknown paths under `/api` answer with a 404 "endpoint" envelope, any
//! other path with a 404 "resource" envelope. A known path with the wrong
//! method answers with a 405 envelope.

pub mod envelope;
pub mod error;

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, OriginalUri, State};
use axum::extract::multipart::MultipartRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::config::Config;
use crate::engine::RuleEngine;
use crate::error::Result;
use crate::issues::AnalysisResult;

use self::envelope::Envelope;
use self::error::ApiError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RuleEngine>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            engine: Arc::new(RuleEngine::default()),
        }
    }
}

/// Build the API router
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    let api = Router::new()
        .route("/analyze-html", post(analyze_html))
        .route("/health", get(health));

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .layer(axum::middleware::map_response(envelope_method_not_allowed))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &Config) -> Result<()> {
    let app = router(AppState::default(), config.server.max_upload_bytes);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutdown signal received");
}

async fn analyze_html(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> std::result::Result<Json<Envelope<AnalysisResult>>, ApiError> {
    let mut multipart = multipart?;
    let mut content = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            content = Some(field.bytes().await?);
        }
    }

    let bytes = content.ok_or(ApiError::MissingFile)?;
    if bytes.is_empty() {
        tracing::warn!("Rejected empty upload");
        return Err(ApiError::EmptyFile);
    }
    let size = bytes.len();
    let html = String::from_utf8(bytes.to_vec()).map_err(|_| ApiError::InvalidEncoding)?;

    let engine = Arc::clone(&state.engine);
    let result = tokio::task::spawn_blocking(move || engine.analyze(&html)).await?;
    tracing::info!(
        bytes = size,
        score = result.compliance_score,
        categories = result.issues.len(),
        "Analyzed upload"
    );

    Ok(Json(Envelope::success(result)))
}

async fn health() -> Json<Envelope<serde_json::Value>> {
    Json(Envelope::success(json!({ "status": "ok" })))
}

/// Nested routes see a stripped path, so match on the original URI
async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        ApiError::NotFound
    } else {
        ApiError::ResourceNotFound
    }
}

/// Replace axum's empty 405 body with an envelope
async fn envelope_method_not_allowed(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return ApiError::MethodNotAllowed.into_response();
    }
    response
}
