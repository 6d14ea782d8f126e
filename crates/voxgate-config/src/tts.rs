use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;

/// Top-level TTS configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Synthesis backend; the `/tts` route is mounted only when present
    #[serde(default)]
    pub backend: Option<TtsBackendConfig>,
    /// Voice catalog and language aliases
    #[serde(default)]
    pub voices: VoicesConfig,
}

/// Configuration for the synthesis backend
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsBackendConfig {
    /// Backend wire protocol
    #[serde(rename = "type")]
    pub backend_type: TtsBackendType,
    /// Base URL of the backend
    pub base_url: String,
    /// Bearer token, if the backend requires one
    #[serde(default)]
    pub api_key: Option<SecretString>,
}

/// Supported synthesis backend protocols
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtsBackendType {
    /// Newline-delimited JSON chunks with base64 audio (neural relay)
    JsonStream,
    /// Raw audio bytes in the response body (XTTS-style server)
    RawStream,
}

/// Voice catalog configuration
///
/// When `languages` is empty the built-in catalog is used. Entries given
/// here replace the built-in table entirely rather than merging with it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoicesConfig {
    /// Canonical key used when a language token cannot be resolved
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Voice entries keyed by canonical language key
    #[serde(default)]
    pub languages: IndexMap<String, VoiceEntry>,
}

impl Default for VoicesConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            languages: IndexMap::new(),
        }
    }
}

/// Voice pair for one language
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoiceEntry {
    /// Male voice identifier
    pub male: String,
    /// Female voice identifier
    pub female: String,
    /// Short codes that resolve to this language (e.g. "en-us")
    #[serde(default)]
    pub codes: Vec<String>,
}

fn default_language() -> String {
    "english".to_string()
}
