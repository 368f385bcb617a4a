//! Error types for the lesson cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Body returned for a lesson id that is not purely decimal digits.
pub const INVALID_LESSON_ID_BODY: &str = "Invalid lesson_id.";

// == Error Enum ==
/// Unified error type for the lesson cache.
#[derive(Error, Debug)]
pub enum Error {
    /// Key not present in a cache store
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Cache constructed with a capacity below one
    #[error("Invalid cache capacity: {0} (must be 1 or bigger)")]
    InvalidCapacity(usize),

    /// Upstream denied access to a lesson or step
    #[error("Access forbidden")]
    Forbidden,

    /// Network failure, timeout or unexpected status from upstream
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Upstream answered 200 with a body we cannot use
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Lesson id is not a decimal number
    #[error("Invalid lesson_id: {0}")]
    InvalidLessonId(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::MalformedResponse(err.to_string())
        } else {
            Error::Upstream(err.to_string())
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::Forbidden => StatusCode::FORBIDDEN.into_response(),
            Error::InvalidLessonId(_) => {
                (StatusCode::BAD_REQUEST, INVALID_LESSON_ID_BODY).into_response()
            }
            Error::Upstream(_) | Error::MalformedResponse(_) => {
                (StatusCode::BAD_GATEWAY, Json(ErrorResponse::new(self.to_string())))
                    .into_response()
            }
            Error::KeyNotFound(_) | Error::InvalidCapacity(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(self.to_string())),
            )
                .into_response(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the lesson cache.
pub type Result<T> = std::result::Result<T, Error>;
