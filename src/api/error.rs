//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes. Bodies carry a
//! `detail` field, which the UI shows verbatim for failed translations.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::dictionary::StoreError;
use crate::translation::TranslationError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Dictionary store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Translation failed
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Store(StoreError::UnknownCategory(_) | StoreError::InvalidValue { .. }) => {
                (StatusCode::BAD_REQUEST, "INVALID_ENTRY")
            }
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR"),
            ApiError::Translation(e) if e.is_client_error() => {
                (StatusCode::BAD_REQUEST, "TRANSLATION_REJECTED")
            }
            ApiError::Translation(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TRANSLATION_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }

    /// Message shown to clients
    pub fn detail(&self) -> String {
        match self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) | ApiError::Internal(msg) => {
                msg.clone()
            }
            ApiError::Store(e) => e.to_string(),
            ApiError::Translation(e) => e.to_string(),
            ApiError::Io(e) => e.to_string(),
        }
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
    pub request_id: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API error occurred"
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request rejected"
            );
        }

        let body = ErrorResponse {
            detail: self.detail(),
            code: code.to_string(),
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
