use axum::body::Body;

use crate::types::TranscriptionRequest;

/// Extractor for multipart form data containing audio files
pub struct ExtractMultipart(pub TranscriptionRequest);

/// Body limit for audio uploads (32 MiB)
const BODY_LIMIT_BYTES: usize = 32 << 20;

impl<S> axum::extract::FromRequest<S> for ExtractMultipart
where
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        use axum::response::IntoResponse;

        let (parts, body) = request.into_parts();

        // Verify content type is multipart/form-data
        let content_type = parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("multipart/form-data") {
            return Err((
                axum::http::StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Unsupported Content-Type, expected: 'Content-Type: multipart/form-data'",
            )
                .into_response());
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            (
                axum::http::StatusCode::BAD_REQUEST,
                format!("Failed to read request body: {err}"),
            )
                .into_response()
        })?;

        // Reassemble the request for multipart parsing
        let mut rebuilt = http::Request::builder().method(parts.method.clone()).uri(parts.uri.clone());

        for (key, value) in &parts.headers {
            rebuilt = rebuilt.header(key, value);
        }

        let rebuilt = rebuilt.body(Body::from(bytes)).map_err(|e| {
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to rebuild request: {e}"),
            )
                .into_response()
        })?;

        let mut multipart = axum::extract::Multipart::from_request(rebuilt, &()).await.map_err(|e| {
            (
                axum::http::StatusCode::BAD_REQUEST,
                format!("Failed to parse multipart form: {e}"),
            )
                .into_response()
        })?;

        let mut audio: Option<Vec<u8>> = None;
        // Browser capture uploads arrive as unnamed webm blobs
        let mut filename = String::from("audio.webm");
        let mut file_content_type = String::from("audio/webm");
        let mut language: Option<String> = None;

        while let Ok(Some(field)) = multipart.next_field().await {
            let field_name = field.name().unwrap_or("").to_string();

            match field_name.as_str() {
                "file" => {
                    if let Some(name) = field.file_name() {
                        filename = name.to_string();
                    }
                    if let Some(ct) = field.content_type() {
                        file_content_type = ct.to_string();
                    }
                    audio = Some(
                        field
                            .bytes()
                            .await
                            .map_err(|e| {
                                (
                                    axum::http::StatusCode::BAD_REQUEST,
                                    format!("Failed to read audio data: {e}"),
                                )
                                    .into_response()
                            })?
                            .to_vec(),
                    );
                }
                "language" => {
                    language = Some(field.text().await.map_err(|e| {
                        (
                            axum::http::StatusCode::BAD_REQUEST,
                            format!("Failed to read language field: {e}"),
                        )
                            .into_response()
                    })?);
                }
                _ => {
                    // Skip unknown fields
                }
            }
        }

        let audio = audio.ok_or_else(|| {
            (
                axum::http::StatusCode::BAD_REQUEST,
                "Missing required 'file' field in multipart form",
            )
                .into_response()
        })?;

        Ok(Self(TranscriptionRequest {
            audio,
            filename,
            content_type: file_content_type,
            language,
        }))
    }
}
