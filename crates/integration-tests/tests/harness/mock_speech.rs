//! Mock speech backend for integration tests
//!
//! Serves both the `json_stream` synthesis protocol and a
//! whisper-compatible transcription endpoint with canned responses.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// Audio payload the mock emits per successful synthesis call
pub const MOCK_AUDIO_LEN: usize = 100;

/// Mock speech backend that returns predictable responses
pub struct MockSpeech {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockSpeechState>,
}

struct MockSpeechState {
    synthesize_count: AtomicU32,
    transcribe_count: AtomicU32,
    /// Voices whose synthesis calls fail with 500
    failing_voices: Vec<String>,
    /// Fail every synthesis call
    fail_all_synthesis: bool,
    /// Fail every transcription call
    fail_transcription: bool,
    /// Voice of the most recent synthesis call
    last_voice: Mutex<Option<String>>,
    /// Transcript returned on success
    transcript: String,
}

impl MockSpeech {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(Vec::new(), false, false).await
    }

    /// Start a mock whose synthesis fails for the given voice ids
    pub async fn start_failing_voices(voices: &[&str]) -> anyhow::Result<Self> {
        Self::start_inner(voices.iter().map(ToString::to_string).collect(), false, false).await
    }

    /// Start a mock whose synthesis always fails
    pub async fn start_failing_all() -> anyhow::Result<Self> {
        Self::start_inner(Vec::new(), true, false).await
    }

    /// Start a mock whose transcription endpoint always fails
    pub async fn start_failing_transcription() -> anyhow::Result<Self> {
        Self::start_inner(Vec::new(), false, true).await
    }

    async fn start_inner(
        failing_voices: Vec<String>,
        fail_all_synthesis: bool,
        fail_transcription: bool,
    ) -> anyhow::Result<Self> {
        let state = Arc::new(MockSpeechState {
            synthesize_count: AtomicU32::new(0),
            transcribe_count: AtomicU32::new(0),
            failing_voices,
            fail_all_synthesis,
            fail_transcription,
            last_voice: Mutex::new(None),
            transcript: "hello from the mock".to_string(),
        });

        let app = Router::new()
            .route("/synthesize", routing::post(handle_synthesize))
            .route("/audio/transcriptions", routing::post(handle_transcribe))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a backend
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of synthesis requests received
    pub fn synthesize_count(&self) -> u32 {
        self.state.synthesize_count.load(Ordering::Relaxed)
    }

    /// Number of transcription requests received
    pub fn transcribe_count(&self) -> u32 {
        self.state.transcribe_count.load(Ordering::Relaxed)
    }

    /// Voice of the most recent synthesis call
    pub fn last_voice(&self) -> Option<String> {
        self.state.last_voice.lock().unwrap().clone()
    }

    /// Transcript the mock returns on success
    pub fn transcript(&self) -> String {
        self.state.transcript.clone()
    }
}

impl Drop for MockSpeech {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

#[derive(Debug, Deserialize)]
struct SynthesizeRequest {
    #[allow(dead_code)]
    text: String,
    voice: String,
}

/// Emit the `json_stream` protocol: a marker line plus audio lines
/// carrying `MOCK_AUDIO_LEN` bytes in total
async fn handle_synthesize(
    State(state): State<Arc<MockSpeechState>>,
    Json(request): Json<SynthesizeRequest>,
) -> impl IntoResponse {
    state.synthesize_count.fetch_add(1, Ordering::Relaxed);
    *state.last_voice.lock().unwrap() = Some(request.voice.clone());

    if state.fail_all_synthesis || state.failing_voices.contains(&request.voice) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "voice unavailable").into_response();
    }

    let payload = vec![0x2A_u8; MOCK_AUDIO_LEN];
    let (first, second) = payload.split_at(MOCK_AUDIO_LEN / 2);

    let mut body = String::from("{\"type\": \"WordBoundary\", \"offset\": 0}\n");
    for half in [first, second] {
        body.push_str(&format!("{{\"type\": \"audio\", \"data\": \"{}\"}}\n", BASE64.encode(half)));
    }
    body.push_str("{\"type\": \"SessionEnd\"}\n");

    ([("content-type", "application/x-ndjson")], body).into_response()
}

async fn handle_transcribe(
    State(state): State<Arc<MockSpeechState>>,
    mut multipart: axum::extract::Multipart,
) -> impl IntoResponse {
    state.transcribe_count.fetch_add(1, Ordering::Relaxed);

    if state.fail_transcription {
        return (StatusCode::INTERNAL_SERVER_ERROR, "model crashed").into_response();
    }

    // Drain the form so the client finishes its upload
    let mut saw_file = false;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            saw_file = field.bytes().await.map(|b| !b.is_empty()).unwrap_or(false);
        }
    }

    if !saw_file {
        return (StatusCode::BAD_REQUEST, "missing file").into_response();
    }

    Json(serde_json::json!({ "text": state.transcript })).into_response()
}
