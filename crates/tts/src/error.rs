use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Synthesis service errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum TtsError {
    /// Request text was empty once parenthetical content was stripped
    #[error("Text is empty after sanitization")]
    EmptyText,

    /// Network or connection error reaching the backend
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Backend API returned a non-success status
    #[error("Backend API error ({status}): {message}")]
    BackendApiError { status: u16, message: String },

    /// Backend stream broke or carried a malformed chunk
    #[error("Stream error: {0}")]
    StreamError(String),

    /// Stream completed without producing any audio bytes
    #[error("No audio produced for voice '{0}'")]
    NoAudio(String),

    /// Both the requested voice and the fallback voice failed
    #[error("Synthesis failed for primary voice ({primary}) and fallback voice ({fallback})")]
    SynthesisFailed {
        primary: Box<TtsError>,
        fallback: Box<TtsError>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl TtsError {
    /// Get the appropriate HTTP status code for this error
    ///
    /// Empty text is a request rejection; every synthesis failure,
    /// including the individual causes wrapped in `SynthesisFailed`,
    /// surfaces as an internal error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyText => StatusCode::BAD_REQUEST,
            Self::ConnectionError(_)
            | Self::BackendApiError { .. }
            | Self::StreamError(_)
            | Self::NoAudio(_)
            | Self::SynthesisFailed { .. }
            | Self::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TtsError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
