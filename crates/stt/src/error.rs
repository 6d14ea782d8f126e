use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Transcription service errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum SttError {
    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network or connection error reaching the backend
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Backend API returned a non-success status
    #[error("Backend API error ({status}): {message}")]
    BackendApiError { status: u16, message: String },

    /// Internal server error
    /// If Some(message), it came from the backend and can be shown
    /// If None, it's an internal error and should not leak details
    #[error("Internal server error")]
    InternalError(Option<String>),
}

impl SttError {
    /// Get the appropriate HTTP status code for this error
    ///
    /// Upstream transcription failures all surface as internal errors;
    /// only malformed uploads are the caller's fault.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::ConnectionError(_) | Self::BackendApiError { .. } | Self::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message that is safe to expose to API consumers
    pub fn client_message(&self) -> String {
        match self {
            Self::InternalError(Some(backend_msg)) => backend_msg.clone(),
            Self::InternalError(None) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Error body: `{"error": "..."}`
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for SttError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = ErrorResponse {
            error: self.client_message(),
        };

        (status, Json(error_response)).into_response()
    }
}
