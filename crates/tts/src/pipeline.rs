use futures_util::StreamExt;

use crate::{
    error::{Result, TtsError},
    provider::{SynthesisBackend, SynthesisChunk},
    voice::ResolvedVoice,
};

/// Drives the synthesis backend and applies the one-shot fallback policy
///
/// A failed primary attempt is retried exactly once with the fixed
/// fallback voice and the original sanitized text, trading voice fidelity
/// for availability. There is no backoff and no partial-result return.
pub struct SynthesisPipeline {
    backend: Box<dyn SynthesisBackend>,
    fallback_voice: String,
}

impl SynthesisPipeline {
    pub fn new(backend: Box<dyn SynthesisBackend>, fallback_voice: String) -> Self {
        Self { backend, fallback_voice }
    }

    /// Synthesize text with the resolved voice, falling back once on failure
    ///
    /// # Errors
    ///
    /// Returns `SynthesisFailed` carrying both causes when the fallback
    /// attempt fails as well.
    pub async fn synthesize(&self, text: &str, voice: &ResolvedVoice) -> Result<Vec<u8>> {
        match self.attempt(text, &voice.voice_id).await {
            Ok(audio) => Ok(audio),
            Err(primary) => {
                tracing::warn!(
                    voice = %voice.voice_id,
                    fallback = %self.fallback_voice,
                    "synthesis failed, retrying with fallback voice: {primary}"
                );

                match self.attempt(text, &self.fallback_voice).await {
                    Ok(audio) => Ok(audio),
                    Err(fallback) => Err(TtsError::SynthesisFailed {
                        primary: Box::new(primary),
                        fallback: Box::new(fallback),
                    }),
                }
            }
        }
    }

    /// One streaming synthesis attempt
    ///
    /// Chunks are appended in arrival order; a stream that completes
    /// without audio bytes counts as a failure.
    async fn attempt(&self, text: &str, voice_id: &str) -> Result<Vec<u8>> {
        let mut stream = self.backend.open_stream(text, voice_id).await?;
        let mut audio = Vec::new();

        while let Some(chunk) = stream.next().await {
            match chunk? {
                SynthesisChunk::Audio(data) => audio.extend_from_slice(&data),
                SynthesisChunk::Marker => {}
            }
        }

        if audio.is_empty() {
            return Err(TtsError::NoAudio(voice_id.to_string()));
        }

        tracing::debug!(
            backend = self.backend.name(),
            voice = voice_id,
            "synthesis complete, {} bytes",
            audio.len(),
        );

        Ok(audio)
    }

    pub fn media_type(&self) -> &'static str {
        self.backend.media_type()
    }
}
