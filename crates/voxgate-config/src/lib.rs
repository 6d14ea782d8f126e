#![allow(clippy::must_use_candidate)]

pub mod cors;
pub mod health;
mod loader;
pub mod server;
pub mod stt;
pub mod tts;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use server::*;
pub use stt::*;
pub use tts::*;

/// Top-level Voxgate configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Speech synthesis configuration
    #[serde(default)]
    pub tts: TtsConfig,
    /// Speech recognition configuration
    #[serde(default)]
    pub stt: SttConfig,
}
