//! Error types for the call cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the backing store, the caches and the HTTP surface.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not found in the backing store
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Stored bytes could not be decoded into the requested type
    #[error("Decode failure: {0}")]
    Decode(String),

    /// Operation against a key holding the wrong kind of value
    #[error("Wrong type for key: {0}")]
    WrongType(String),

    /// The backing store could not be reached
    #[error("Backing store unavailable: {0}")]
    Backend(String),

    /// Remote page fetch failed
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CacheError::WrongType(_) => StatusCode::CONFLICT,
            CacheError::Backend(_) => StatusCode::SERVICE_UNAVAILABLE,
            CacheError::Fetch(_) => StatusCode::BAD_GATEWAY,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for CacheError {
    fn from(err: reqwest::Error) -> Self {
        CacheError::Fetch(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the call cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CacheError::NotFound("k".into()), StatusCode::NOT_FOUND),
            (CacheError::Decode("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (CacheError::WrongType("k".into()), StatusCode::CONFLICT),
            (CacheError::Backend("down".into()), StatusCode::SERVICE_UNAVAILABLE),
            (CacheError::Fetch("dns".into()), StatusCode::BAD_GATEWAY),
            (CacheError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::NotFound("abc".into()).to_string(),
            "Key not found: abc"
        );
        assert_eq!(
            CacheError::Backend("connection refused".into()).to_string(),
            "Backing store unavailable: connection refused"
        );
    }
}
