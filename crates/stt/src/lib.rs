#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod http_client;
mod provider;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

pub use error::{Result, SttError};
pub use server::Server;
pub use types::{TranscriptionRequest, TranscriptionResponse};
use request::ExtractMultipart;

/// Build the STT server from configuration
///
/// Returns `None` when no recognition backend is configured; the `/stt`
/// route is simply not mounted in that case.
pub fn build_server(config: &voxgate_config::Config) -> anyhow::Result<Option<Arc<Server>>> {
    let Some(ref backend) = config.stt.backend else {
        tracing::debug!("no STT backend configured");
        return Ok(None);
    };

    let server = Arc::new(
        Server::from_config(backend).map_err(|e| anyhow::anyhow!("Failed to initialize STT server: {e}"))?,
    );
    Ok(Some(server))
}

/// Create the endpoint router for STT
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/stt", post(transcribe))
}

/// Handle transcription requests
async fn transcribe(
    State(server): State<Arc<Server>>,
    ExtractMultipart(request): ExtractMultipart,
) -> Result<Json<TranscriptionResponse>> {
    tracing::debug!("transcription handler called, {} byte upload", request.audio.len());

    let response = server.transcribe(request).await?;

    tracing::debug!("transcription complete");

    Ok(Json(response))
}
