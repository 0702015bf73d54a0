//! Scanner Error Types
//!
//! Scanner routes answer every failure with HTTP 400 and a plain-text
//! body. The route decides the prefix by wrapping use-case errors in
//! [`ScannerError::Check`] or [`ScannerError::TestRule`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::kind::ErrorKind;
use thiserror::Error;

pub type ScannerResult<T> = Result<T, ScannerError>;

#[derive(Debug, Error)]
pub enum ScannerError {
    /// `file` field missing on /yara/check
    #[error("No file uploaded")]
    MissingUpload,

    /// `rulefile` or `targetfile` missing on /yara/test-rule
    #[error("Both files must be uploaded.")]
    MissingRuleOrTarget,

    /// Multipart body could not be read
    #[error("Invalid upload: {0}")]
    Multipart(String),

    /// Writing or deleting an upload failed
    #[error("Upload storage failed: {0}")]
    Storage(#[source] std::io::Error),

    /// Rules directory missing or unreadable
    #[error("Rules directory unavailable: {0}")]
    RulesDirectory(#[source] std::io::Error),

    /// Rule source could not be read or compiled
    #[error("{0}")]
    Compile(String),

    /// Matching failed (timeout, unreadable target)
    #[error("{0}")]
    Scan(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// Failure inside the check workflow
    #[error("YARA error: {0}")]
    Check(Box<ScannerError>),

    /// Failure inside the test-rule workflow
    #[error("Rule test failed: {0}")]
    TestRule(Box<ScannerError>),
}

impl ScannerError {
    pub fn check(err: ScannerError) -> Self {
        ScannerError::Check(Box::new(err))
    }

    pub fn test_rule(err: ScannerError) -> Self {
        ScannerError::TestRule(Box::new(err))
    }

    /// Every scanner failure is reported as 400
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Finer classification; picks the log level
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScannerError::MissingUpload
            | ScannerError::MissingRuleOrTarget
            | ScannerError::Multipart(_)
            | ScannerError::Compile(_) => ErrorKind::BadRequest,
            ScannerError::Scan(_) => ErrorKind::UnprocessableEntity,
            ScannerError::RulesDirectory(_) => ErrorKind::ServiceUnavailable,
            ScannerError::Storage(_) | ScannerError::Internal(_) => {
                ErrorKind::InternalServerError
            }
            ScannerError::Check(inner) | ScannerError::TestRule(inner) => inner.kind(),
        }
    }

    fn log(&self) {
        if self.kind().is_server_error() {
            tracing::error!(error = %self, "Scanner failure");
        } else {
            tracing::warn!(error = %self, "Scan request rejected");
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for ScannerError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ScannerError::Multipart(err.body_text())
    }
}

impl From<axum::extract::multipart::MultipartRejection> for ScannerError {
    fn from(rejection: axum::extract::multipart::MultipartRejection) -> Self {
        ScannerError::Multipart(rejection.body_text())
    }
}

impl IntoResponse for ScannerError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), self.to_string()).into_response()
    }
}
