use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

/// State for the health endpoint
#[derive(Clone)]
pub struct HealthState {
    /// Canonical language keys the voice catalog supports
    pub supported_languages: Arc<Vec<String>>,
}

#[derive(Serialize)]
struct HealthResponse<'a> {
    status: &'static str,
    supported_languages: &'a [String],
}

/// Health check handler
pub async fn health_handler(State(state): State<HealthState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        supported_languages: &state.supported_languages,
    })
    .into_response()
}
