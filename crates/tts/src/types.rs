use serde::Deserialize;

/// Speech synthesis request
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    /// Text to synthesize into speech
    pub text: String,
    /// Language token: ISO-style code ("hi-IN") or display name ("Hindi")
    pub language: String,
    /// Gender hint; anything other than "female" selects the male voice
    #[serde(default = "default_speaker")]
    pub speaker_id: String,
}

fn default_speaker() -> String {
    "female".to_string()
}

/// Assembled audio from the synthesis pipeline
pub struct SpeechResponse {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}

impl SpeechResponse {
    /// Convert the speech response into an axum HTTP response
    pub fn into_response(self) -> axum::response::Response {
        axum::response::Response::builder()
            .header(http::header::CONTENT_TYPE, self.content_type)
            .body(axum::body::Body::from(self.audio))
            .unwrap_or_else(|_| {
                axum::response::Response::builder()
                    .status(http::StatusCode::INTERNAL_SERVER_ERROR)
                    .body(axum::body::Body::empty())
                    .unwrap()
            })
    }
}
