//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use voxgate_config::{
    Config, CorsConfig, HealthConfig, ServerConfig, SttBackendConfig, SttBackendType, SttConfig, TtsBackendConfig,
    TtsBackendType, TtsConfig, VoicesConfig,
};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: None,
                },
                tts: TtsConfig::default(),
                stt: SttConfig::default(),
            },
        }
    }

    /// Point the synthesis backend at a mock server
    pub fn with_tts_backend(mut self, base_url: &str) -> Self {
        self.config.tts.backend = Some(TtsBackendConfig {
            backend_type: TtsBackendType::JsonStream,
            base_url: base_url.to_owned(),
            api_key: None,
        });
        self
    }

    /// Point the recognition backend at a mock server
    pub fn with_stt_backend(mut self, base_url: &str) -> Self {
        self.config.stt.backend = Some(SttBackendConfig {
            backend_type: SttBackendType::Whisper,
            base_url: base_url.to_owned(),
            api_key: None,
            model: "whisper-1".to_owned(),
        });
        self
    }

    /// Replace the voice catalog
    pub fn with_voices(mut self, voices: VoicesConfig) -> Self {
        self.config.tts.voices = voices;
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
