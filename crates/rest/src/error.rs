//! Error types for the REST API.
//!
//! Storage errors are mapped to HTTP responses with a JSON body of the form
//! `{"detail": "..."}`:
//!
//! | Error | HTTP Status | Body |
//! |-------|-------------|------|
//! | NotFound | 404 | `{"detail": "<Kind> not found"}` |
//! | BadRequest | 400 | `{"detail": "<message>"}` |
//! | Internal | 500 | `{"detail": "<message>"}` |

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use medibase_model::EntityKind;
use medibase_persistence::StorageError;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum ApiError {
    /// No record of this kind with the requested identity (HTTP 404).
    NotFound {
        /// The kind that was looked up.
        kind: EntityKind,
    },

    /// The request was malformed (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// The storage backend failed; nothing the client can fix (HTTP 500).
    Internal {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { kind } => write!(f, "{kind} not found"),
            ApiError::BadRequest { message } => write!(f, "Bad request: {message}"),
            ApiError::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::NotFound { kind } => (StatusCode::NOT_FOUND, format!("{kind} not found")),
            ApiError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
            }
        };

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { kind } => ApiError::NotFound { kind },
            other => ApiError::Internal {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias for REST operations.
pub type ApiResult<T> = Result<T, ApiError>;
