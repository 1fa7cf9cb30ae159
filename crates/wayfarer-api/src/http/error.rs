//! Application error type mapping to HTTP status codes.
//!
//! Every error body has the shape `{"error": string}`. Validation and
//! not-found failures are client errors; provider failures surface as bad
//! gateway since the upstream model call is what broke.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use wayfarer_types::error::{ChatError, TripError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Trip validation, lookup, or storage errors.
    Trip(TripError),
    /// Chat/completion errors.
    Chat(ChatError),
    /// Malformed request body.
    BadRequest(String),
    /// Generic internal error.
    Internal(String),
}

impl From<TripError> for AppError {
    fn from(e: TripError) -> Self {
        AppError::Trip(e)
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Trip(TripError::Validation(e)) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Trip(TripError::NotFound) => {
                (StatusCode::NOT_FOUND, "Trip not found".to_string())
            }
            AppError::Trip(TripError::Storage(msg)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Chat(ChatError::Completion(e)) => {
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = json!({ "error": message });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
