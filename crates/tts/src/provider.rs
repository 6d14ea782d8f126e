pub(crate) mod json_stream;
pub(crate) mod raw_stream;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;

use crate::error::Result;

/// One unit of a streamed synthesis response
#[derive(Debug)]
pub enum SynthesisChunk {
    /// Audio payload bytes, appended to the buffer in arrival order
    Audio(Bytes),
    /// Non-audio chunk (timing markers, word boundaries); discarded
    Marker,
}

/// A live synthesis stream
pub type ChunkStream = BoxStream<'static, Result<SynthesisChunk>>;

/// Trait for synthesis backend implementations
#[async_trait]
pub trait SynthesisBackend: Send + Sync {
    /// Open a streaming synthesis call for the given text and voice
    async fn open_stream(&self, text: &str, voice_id: &str) -> Result<ChunkStream>;

    /// Media type of the assembled audio
    fn media_type(&self) -> &'static str;

    /// Get the backend name
    fn name(&self) -> &str;
}
