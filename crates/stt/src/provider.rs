pub(crate) mod whisper;

use async_trait::async_trait;

use crate::types::{TranscriptionRequest, TranscriptionResponse};

/// Trait for recognition backend implementations
#[async_trait]
pub(crate) trait RecognitionBackend: Send + Sync {
    /// Transcribe audio to text
    async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<TranscriptionResponse>;

    /// Get the backend name
    fn name(&self) -> &str;
}
