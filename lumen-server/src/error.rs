//! Server error types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use lumen_core::{ContentError, StoreError};

/// Errors that can occur while running the lumen server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the specified address
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error returned to API clients.
///
/// Every variant renders as the same JSON body shape, so the front-end can
/// always read `message` without caring which endpoint failed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request is missing or malforms a required field
    #[error("{0}")]
    InvalidInput(String),

    /// Session, learner, topic, or content does not exist
    #[error("{0}")]
    NotFound(String),

    /// The server could not produce a response
    #[error("{0}")]
    Internal(String),
}

/// JSON body for error responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always "error"
    pub status: String,
    /// Human-readable cause
    pub message: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: "error".to_string(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmptyName => ApiError::InvalidInput(err.to_string()),
            StoreError::LearnerNotFound(_) | StoreError::UnknownTopic(_) => {
                ApiError::NotFound(err.to_string())
            }
        }
    }
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::SourceMissing { .. } | ContentError::UnknownTopic(_) => {
                ApiError::NotFound(err.to_string())
            }
            ContentError::SourceCorrupt { .. } => {
                tracing::error!(error = %err, "content lookup failed");
                ApiError::Internal(err.to_string())
            }
        }
    }
}
