use askama::Template;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Render the brief form page. Stateless; unaffected by prior POST failures.
pub async fn index() -> impl IntoResponse {
    IndexTemplate {}
}

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "creative-agent",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness check: verify the model provider is usable.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.text_provider.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
