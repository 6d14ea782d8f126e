use voxgate_config::{SttBackendConfig, SttBackendType};

use crate::{
    error::Result,
    provider::{RecognitionBackend, whisper::WhisperBackend},
    types::{TranscriptionRequest, TranscriptionResponse},
};

/// STT server that relays uploads to the recognition backend
pub struct Server {
    backend: Box<dyn RecognitionBackend>,
}

impl Server {
    pub(crate) fn from_config(config: &SttBackendConfig) -> Result<Self> {
        let backend: Box<dyn RecognitionBackend> = match config.backend_type {
            SttBackendType::Whisper => Box::new(WhisperBackend::new(
                config.base_url.clone(),
                config.api_key.clone(),
                config.model.clone(),
            )),
        };

        tracing::debug!(backend = backend.name(), "STT server initialized");

        Ok(Self { backend })
    }

    /// Transcribe an uploaded audio clip
    pub(crate) async fn transcribe(&self, request: TranscriptionRequest) -> Result<TranscriptionResponse> {
        self.backend.transcribe(request).await
    }
}
