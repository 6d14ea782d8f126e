use voxgate_config::{TtsBackendConfig, TtsBackendType, VoicesConfig};

use crate::{
    error::{Result, TtsError},
    pipeline::SynthesisPipeline,
    provider::{SynthesisBackend, json_stream::JsonStreamBackend, raw_stream::RawStreamBackend},
    sanitize::sanitize,
    types::{SpeechRequest, SpeechResponse},
    voice::VoiceSelector,
};

/// TTS server: voice selection plus the synthesis pipeline
pub struct Server {
    selector: VoiceSelector,
    pipeline: SynthesisPipeline,
}

impl Server {
    /// Build the server from the backend and voices configuration
    ///
    /// The catalog is validated here, once, at startup; a malformed
    /// catalog aborts construction rather than surfacing per request.
    pub(crate) fn from_config(backend_config: &TtsBackendConfig, voices: &VoicesConfig) -> Result<Self> {
        let selector = VoiceSelector::from_config(voices)?;

        let backend: Box<dyn SynthesisBackend> = match backend_config.backend_type {
            TtsBackendType::JsonStream => Box::new(JsonStreamBackend::new(
                backend_config.base_url.clone(),
                backend_config.api_key.clone(),
            )),
            TtsBackendType::RawStream => Box::new(RawStreamBackend::new(
                backend_config.base_url.clone(),
                backend_config.api_key.clone(),
            )),
        };

        tracing::debug!(
            backend = backend.name(),
            languages = selector.catalog().languages().len(),
            "TTS server initialized"
        );

        let fallback_voice = selector.catalog().fallback_voice().to_string();
        let pipeline = SynthesisPipeline::new(backend, fallback_voice);

        Ok(Self { selector, pipeline })
    }

    /// Sanitize, resolve a voice, and run the synthesis pipeline
    ///
    /// # Errors
    ///
    /// `EmptyText` when nothing is left to vocalize after sanitization;
    /// `SynthesisFailed` when the primary and fallback attempts both fail.
    pub async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse> {
        let text = sanitize(&request.text);
        if text.is_empty() {
            return Err(TtsError::EmptyText);
        }

        let voice = self.selector.select(&request.language, &request.speaker_id);

        tracing::debug!(language = %voice.language, voice = %voice.voice_id, "voice selected");

        let audio = self.pipeline.synthesize(&text, &voice).await?;

        Ok(SpeechResponse {
            audio,
            content_type: self.pipeline.media_type().to_string(),
        })
    }

    /// Canonical language keys the catalog supports, in catalog order
    pub fn supported_languages(&self) -> Vec<String> {
        self.selector.catalog().languages()
    }
}
