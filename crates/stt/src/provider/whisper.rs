use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::SttError,
    http_client::http_client,
    types::{TranscriptionRequest, TranscriptionResponse},
};

use super::RecognitionBackend;

/// Whisper-compatible recognition backend
///
/// Targets any server exposing the `/audio/transcriptions` multipart
/// endpoint: a local whisper.cpp instance or the hosted API.
pub(crate) struct WhisperBackend {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    model: String,
}

impl WhisperBackend {
    pub fn new(base_url: String, api_key: Option<SecretString>, model: String) -> Self {
        Self {
            client: http_client(),
            base_url,
            api_key,
            model,
        }
    }
}

#[derive(serde::Deserialize)]
struct WhisperResponse {
    text: String,
}

#[async_trait]
impl RecognitionBackend for WhisperBackend {
    async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<TranscriptionResponse> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        tracing::debug!("whisper transcription request: {} bytes", request.audio.len());

        let mut form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(request.audio)
                    .file_name(request.filename)
                    .mime_str(&request.content_type)
                    .map_err(|e| SttError::InvalidRequest(format!("Invalid content type: {e}")))?,
            )
            .text("model", self.model.clone());

        if let Some(language) = request.language {
            form = form.text("language", language);
        }

        let mut upstream = self.client.post(&url).multipart(form);

        if let Some(ref api_key) = self.api_key {
            upstream = upstream.header("Authorization", format!("Bearer {}", api_key.expose_secret()));
        }

        let response = upstream.send().await.map_err(|e| {
            tracing::error!("whisper request failed: {e}");
            SttError::ConnectionError(format!("Failed to send request to recognition backend: {e}"))
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("whisper API error ({status}): {error_text}");

            return Err(SttError::BackendApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let result: WhisperResponse = response.json().await.map_err(|e| {
            tracing::error!("failed to parse whisper response: {e}");
            SttError::InternalError(None)
        })?;

        tracing::debug!("whisper transcription complete");

        Ok(TranscriptionResponse {
            text: result.text.trim().to_string(),
        })
    }

    fn name(&self) -> &str {
        "whisper"
    }
}
