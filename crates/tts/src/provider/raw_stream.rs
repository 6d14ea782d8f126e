use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::TtsError,
    http_client::http_client,
    provider::{ChunkStream, SynthesisBackend, SynthesisChunk},
};

/// XTTS-style server whose response body is the audio stream itself
///
/// No chunk framing: every transfer chunk is audio, and the backend
/// signals failure through the HTTP status alone.
pub(crate) struct RawStreamBackend {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl RawStreamBackend {
    pub fn new(base_url: String, api_key: Option<SecretString>) -> Self {
        Self {
            client: http_client(),
            base_url,
            api_key,
        }
    }
}

#[derive(serde::Serialize)]
struct RawRequest<'a> {
    text: &'a str,
    voice: &'a str,
}

#[async_trait]
impl SynthesisBackend for RawStreamBackend {
    async fn open_stream(&self, text: &str, voice_id: &str) -> crate::error::Result<ChunkStream> {
        let url = format!("{}/synthesize", self.base_url);

        tracing::debug!("raw_stream request: voice={voice_id}, text_len={}", text.len());

        let mut request = self.client.post(&url).json(&RawRequest { text, voice: voice_id });

        if let Some(ref api_key) = self.api_key {
            request = request.header("Authorization", format!("Bearer {}", api_key.expose_secret()));
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("raw_stream request failed: {e}");
            TtsError::ConnectionError(format!("Failed to send request to synthesis backend: {e}"))
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("raw_stream backend error ({status}): {error_text}");

            return Err(TtsError::BackendApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chunks = response.bytes_stream().map(|result| {
            result
                .map(SynthesisChunk::Audio)
                .map_err(|e| TtsError::ConnectionError(format!("stream read failed: {e}")))
        });

        Ok(Box::pin(chunks))
    }

    fn media_type(&self) -> &'static str {
        "audio/wav"
    }

    fn name(&self) -> &str {
        "raw_stream"
    }
}
