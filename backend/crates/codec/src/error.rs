//! Codec Error Types
//!
//! Wire contract: HTTP 400 with `{"error": "<message>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use platform::crypto::DecodeError;
use thiserror::Error;

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Invalid action")]
    InvalidAction,

    /// Malformed base64 or non-UTF-8 result
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DecodeError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl CodecError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn log(&self) {
        tracing::debug!(error = %self, "Base64 conversion rejected");
    }
}

impl From<axum::extract::rejection::JsonRejection> for CodecError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        CodecError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for CodecError {
    fn into_response(self) -> Response {
        self.log();
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}
