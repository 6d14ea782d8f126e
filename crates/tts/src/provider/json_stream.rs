use async_stream::try_stream;
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::TtsError,
    http_client::http_client,
    provider::{ChunkStream, SynthesisBackend, SynthesisChunk},
};

/// Guard against a backend that never emits a newline
const MAX_BUFFER_SIZE: usize = 1024 * 1024;

/// Neural relay speaking newline-delimited JSON chunks
///
/// Each line is one chunk: `{"type": "audio", "data": "<base64>"}` carries
/// payload bytes; any other type (word boundaries, sentence markers) is
/// passed through as a non-audio chunk. An `error` chunk aborts the stream.
pub(crate) struct JsonStreamBackend {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl JsonStreamBackend {
    pub fn new(base_url: String, api_key: Option<SecretString>) -> Self {
        Self {
            client: http_client(),
            base_url,
            api_key,
        }
    }
}

#[derive(serde::Serialize)]
struct StreamRequest<'a> {
    text: &'a str,
    voice: &'a str,
}

#[derive(serde::Deserialize)]
struct StreamEvent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

fn parse_event(line: &str) -> crate::error::Result<SynthesisChunk> {
    let event: StreamEvent =
        serde_json::from_str(line).map_err(|e| TtsError::StreamError(format!("malformed chunk: {e}")))?;

    match event.kind.as_str() {
        "audio" => {
            let data = event.data.unwrap_or_default();
            let audio = BASE64
                .decode(data)
                .map_err(|e| TtsError::StreamError(format!("invalid audio chunk: {e}")))?;
            Ok(SynthesisChunk::Audio(Bytes::from(audio)))
        }
        "error" => Err(TtsError::StreamError(
            event.message.unwrap_or_else(|| "backend reported an error".to_string()),
        )),
        _ => Ok(SynthesisChunk::Marker),
    }
}

#[async_trait]
impl SynthesisBackend for JsonStreamBackend {
    async fn open_stream(&self, text: &str, voice_id: &str) -> crate::error::Result<ChunkStream> {
        let url = format!("{}/synthesize", self.base_url);

        tracing::debug!("json_stream request: voice={voice_id}, text_len={}", text.len());

        let mut request = self.client.post(&url).json(&StreamRequest { text, voice: voice_id });

        if let Some(ref api_key) = self.api_key {
            request = request.header("Authorization", format!("Bearer {}", api_key.expose_secret()));
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("json_stream request failed: {e}");
            TtsError::ConnectionError(format!("Failed to send request to synthesis backend: {e}"))
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("json_stream backend error ({status}): {error_text}");

            return Err(TtsError::BackendApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let mut byte_stream = Box::pin(response.bytes_stream());

        Ok(Box::pin(try_stream! {
            let mut buffer = Vec::<u8>::new();

            while let Some(result) = byte_stream.next().await {
                let bytes = result
                    .map_err(|e| TtsError::ConnectionError(format!("stream read failed: {e}")))?;
                buffer.extend_from_slice(&bytes);

                if buffer.len() > MAX_BUFFER_SIZE {
                    Err(TtsError::StreamError(format!(
                        "stream buffer exceeded maximum size of {MAX_BUFFER_SIZE} bytes"
                    )))?;
                }

                while let Some(newline_pos) = buffer.iter().position(|&b| b == b'\n') {
                    let line: Vec<u8> = buffer.drain(..=newline_pos).collect();
                    let line = String::from_utf8_lossy(&line);
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    yield parse_event(line)?;
                }
            }

            // A final line without a trailing newline is still a chunk
            let rest = String::from_utf8_lossy(&buffer);
            let rest = rest.trim();
            if !rest.is_empty() {
                yield parse_event(rest)?;
            }
        }))
    }

    fn media_type(&self) -> &'static str {
        "audio/mpeg"
    }

    fn name(&self) -> &str {
        "json_stream"
    }
}
