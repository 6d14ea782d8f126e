use secrecy::SecretString;
use serde::Deserialize;

/// Top-level STT configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// Recognition backend; the `/stt` route is mounted only when present
    #[serde(default)]
    pub backend: Option<SttBackendConfig>,
}

/// Configuration for the recognition backend
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttBackendConfig {
    /// Backend wire protocol
    #[serde(rename = "type")]
    pub backend_type: SttBackendType,
    /// Base URL of the backend
    pub base_url: String,
    /// Bearer token, if the backend requires one
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Model identifier passed to the backend
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    "whisper-1".to_string()
}

/// Supported recognition backends
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SttBackendType {
    /// OpenAI-compatible `/audio/transcriptions` endpoint
    Whisper,
}
