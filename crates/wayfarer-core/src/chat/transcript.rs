//! TranscriptStore trait definition.
//!
//! The durable, replayable store of conversation turns. Implementations
//! live in wayfarer-infra (e.g., `JsonlTranscript`). Uses native async fn
//! in traits (RPITIT, Rust 2024 edition).

use wayfarer_types::chat::ConversationTurn;
use wayfarer_types::error::TranscriptError;

/// Append-only store of conversation turns.
pub trait TranscriptStore: Send + Sync {
    /// Ensure the backing store exists, creating an empty one if missing.
    ///
    /// Idempotent; never truncates existing content.
    fn initialize(
        &self,
    ) -> impl std::future::Future<Output = Result<(), TranscriptError>> + Send;

    /// Read every stored turn in original write order.
    ///
    /// Infallible by contract: a turn that fails to parse is skipped, and
    /// a store that cannot be read at all loads as empty. Both degrade
    /// with a warning rather than an error, so startup never fails on bad
    /// history.
    fn load_all(&self) -> impl std::future::Future<Output = Vec<ConversationTurn>> + Send;

    /// Append exactly the given turns to the end of the store.
    ///
    /// Callers pass only the delta produced since the last append, never
    /// the full history. An empty slice is a no-op. A write failure is
    /// reported through the error; callers treat persistence as
    /// best-effort and keep their in-memory state.
    fn append(
        &self,
        turns: &[ConversationTurn],
    ) -> impl std::future::Future<Output = Result<(), TranscriptError>> + Send;
}
