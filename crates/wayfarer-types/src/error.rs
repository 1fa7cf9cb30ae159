use thiserror::Error;

use crate::llm::CompletionError;

/// Validation failures raised when assembling a [`crate::trip::Trip`].
///
/// Wrong-type input is a distinct kind from missing/empty input so callers
/// can tell "you sent a number where text belongs" apart from "you sent
/// nothing".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripValidationError {
    #[error("field '{field}' is required")]
    RequiredField { field: &'static str },

    #[error("field '{field}' must be text, got {actual}")]
    WrongType {
        field: &'static str,
        actual: &'static str,
    },

    #[error("field '{field}' has invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDateFormat { field: &'static str, value: String },

    #[error("start date '{start}' is after end date '{end}'")]
    DateOrder { start: String, end: String },
}

/// Errors from trip operations.
#[derive(Debug, Error)]
pub enum TripError {
    #[error(transparent)]
    Validation(#[from] TripValidationError),

    #[error("trip not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from repository operations (used by trait definitions in wayfarer-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from the conversation transcript store.
///
/// Append failures are reported but non-fatal: the chat service logs them
/// and keeps its in-memory turns, which stay authoritative for the life of
/// the process.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("transcript io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("transcript encode error: {0}")]
    Encode(String),
}

/// Errors from the chat service.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("completion provider failure: {0}")]
    Completion(#[from] CompletionError),
}
