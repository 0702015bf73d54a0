//! Password Generator Error Types
//!
//! Every failure on these routes is a client error: the wire contract is
//! HTTP 400 with `{"error": "<message>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type PassgenResult<T> = Result<T, PassgenError>;

#[derive(Debug, Error)]
pub enum PassgenError {
    /// Length outside [4, 128] or not an integer
    #[error("Invalid password length")]
    InvalidLength,

    /// Nothing left to draw from after exclusions
    #[error("Character set is empty after exclusion")]
    EmptyCharset,

    /// Body could not be read as a generate request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl PassgenError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn log(&self) {
        match self {
            PassgenError::InvalidRequest(detail) => {
                tracing::warn!(detail = %detail, "Rejected malformed password request");
            }
            _ => {
                tracing::debug!(error = %self, "Password generation refused");
            }
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for PassgenError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        PassgenError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for PassgenError {
    fn into_response(self) -> Response {
        self.log();
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}
