//! CompletionProvider trait definition.
//!
//! This is the abstraction over the external language model: given an
//! ordered conversation context, it produces the next assistant turn.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use wayfarer_types::chat::ConversationTurn;
use wayfarer_types::llm::CompletionError;

/// Trait for completion provider backends.
///
/// Implementations live in wayfarer-infra (e.g., `OpenAiChatProvider`).
/// A provider failure propagates to the caller; it is never swallowed.
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Generate the next assistant turn for the given conversation context.
    ///
    /// The returned turn carries whatever auxiliary metadata the provider
    /// attaches (model, token usage, response id) in its `extra` map.
    fn complete(
        &self,
        context: &[ConversationTurn],
    ) -> impl std::future::Future<Output = Result<ConversationTurn, CompletionError>> + Send;
}
