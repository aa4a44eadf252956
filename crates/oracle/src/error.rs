use axum::http::StatusCode;
use axum_core::response::{IntoResponse as AxumCoreIntoResponse, Response};

/// Failures while turning a caller-supplied key string into a signing key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("invalid PEM envelope: {0}")]
    Envelope(String),
    #[error("invalid private key container: {0}")]
    KeyFormat(String),
    #[error("expected {expected} private key, got {actual}")]
    AlgorithmMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("error unmarshaling request: {0}")]
    BadRequest(String),
    #[error("error decoding key: {0}")]
    Key(#[from] KeyError),
    #[error("error decoding signature: {0}")]
    Encoding(#[from] base64::DecodeError),
}

/// Trait implementation to convert this error into an axum http response.
///
/// Only a coarse hint reaches the caller; the detailed kind is logged.
impl AxumCoreIntoResponse for OracleError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "rejecting request");
        let hint = match self {
            OracleError::BadRequest(_) => "Bad request",
            OracleError::Key(_) => "Error decoding key",
            OracleError::Encoding(_) => "Message not in Base64 format",
        };
        (StatusCode::BAD_REQUEST, hint).into_response()
    }
}
