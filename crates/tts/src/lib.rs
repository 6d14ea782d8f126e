#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod pipeline;
mod provider;
mod request;
mod sanitize;
mod server;
mod types;
mod voice;

use std::sync::Arc;

use axum::{Router, extract::State, routing::post};

pub use error::{Result, TtsError};
pub use server::Server;
pub use types::{SpeechRequest, SpeechResponse};
use request::ExtractPayload;

/// Build the TTS server from configuration
///
/// Returns `None` when no synthesis backend is configured; the `/tts`
/// route is simply not mounted in that case.
pub fn build_server(config: &voxgate_config::Config) -> anyhow::Result<Option<Arc<Server>>> {
    let Some(ref backend) = config.tts.backend else {
        tracing::debug!("no TTS backend configured");
        return Ok(None);
    };

    let server = Arc::new(
        Server::from_config(backend, &config.tts.voices)
            .map_err(|e| anyhow::anyhow!("Failed to initialize TTS server: {e}"))?,
    );
    Ok(Some(server))
}

/// Create the endpoint router for TTS
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/tts", post(synthesize))
}

/// Handle speech synthesis requests
async fn synthesize(
    State(server): State<Arc<Server>>,
    ExtractPayload(request): ExtractPayload<SpeechRequest>,
) -> Result<axum::response::Response> {
    tracing::debug!("synthesis handler called for language: {}", request.language);

    let response = server.synthesize(request).await?;

    tracing::debug!("speech synthesis complete");

    Ok(response.into_response())
}
