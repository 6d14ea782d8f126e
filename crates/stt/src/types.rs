use serde::{Deserialize, Serialize};

/// One uploaded audio clip to transcribe
#[derive(Debug)]
pub struct TranscriptionRequest {
    /// Raw audio data
    pub audio: Vec<u8>,
    /// Original filename
    pub filename: String,
    /// Content type of the audio file
    pub content_type: String,
    /// Optional language hint (ISO 639-1)
    pub language: Option<String>,
}

/// Transcription result
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Transcribed text
    pub text: String,
}
