//! Completion provider error type.
//!
//! The provider itself is a trait in `wayfarer-core`; implementations live
//! in `wayfarer-infra`. Provider failures are fatal to the request that
//! triggered them and propagate to the HTTP boundary unchanged.

/// Errors from completion provider operations.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("network error: {0}")]
    Network(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}
