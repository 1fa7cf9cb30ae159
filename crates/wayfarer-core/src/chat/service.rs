//! Chat service orchestrating conversation memory and the completion provider.
//!
//! ChatService owns the in-memory turn sequence, replays the persisted
//! transcript at startup, and after each exchange flushes only the turns
//! produced by that exchange.

use tokio::sync::Mutex;
use tracing::{info, warn};

use wayfarer_types::chat::ConversationTurn;
use wayfarer_types::error::{ChatError, TranscriptError};

use crate::chat::transcript::TranscriptStore;
use crate::llm::provider::CompletionProvider;

/// Orchestrates conversation memory and completion calls.
///
/// Generic over `CompletionProvider` and `TranscriptStore` to maintain
/// clean architecture (wayfarer-core never depends on wayfarer-infra).
///
/// The mutex serializes the whole read-modify-append sequence across
/// concurrent requests, so each exchange appends its delta at most once
/// and turn order never interleaves.
pub struct ChatService<P: CompletionProvider, T: TranscriptStore> {
    provider: P,
    transcript: T,
    turns: Mutex<Vec<ConversationTurn>>,
}

impl<P: CompletionProvider, T: TranscriptStore> ChatService<P, T> {
    /// Initialize the transcript store and replay its history into memory.
    pub async fn start(provider: P, transcript: T) -> Result<Self, TranscriptError> {
        transcript.initialize().await?;
        let turns = transcript.load_all().await;
        info!(turns = turns.len(), provider = provider.name(), "Conversation memory loaded");

        Ok(Self {
            provider,
            transcript,
            turns: Mutex::new(turns),
        })
    }

    /// Answer a prompt, extending the conversation.
    ///
    /// The provider sees the full prior conversation plus the new human
    /// turn. On provider failure nothing is added to memory or the
    /// transcript. On success both new turns enter memory, and exactly
    /// that delta is appended to the transcript; an append failure is
    /// logged and swallowed -- in-memory state stays authoritative.
    pub async fn respond(&self, prompt: &str) -> Result<String, ChatError> {
        let mut turns = self.turns.lock().await;
        let prior_len = turns.len();

        let human = ConversationTurn::human(prompt);
        let mut context = turns.clone();
        context.push(human.clone());

        let reply = self.provider.complete(&context).await?;
        let response = reply.content.clone();

        turns.push(human);
        turns.push(reply);

        let delta = &turns[prior_len..];
        if let Err(err) = self.transcript.append(delta).await {
            warn!(error = %err, appended = delta.len(), "Failed to persist new turns; keeping them in memory");
        }

        Ok(response)
    }

    /// Number of turns currently held in memory.
    pub async fn turn_count(&self) -> usize {
        self.turns.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex as StdMutex;
    use wayfarer_types::llm::CompletionError;

    /// Echoing provider; can be flipped into a failing state.
    struct EchoProvider {
        fail: AtomicBool,
    }

    impl EchoProvider {
        fn new() -> Self {
            Self {
                fail: AtomicBool::new(false),
            }
        }
    }

    impl CompletionProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(
            &self,
            context: &[ConversationTurn],
        ) -> Result<ConversationTurn, CompletionError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(CompletionError::Provider {
                    message: "boom".to_string(),
                });
            }
            let last = context.last().expect("context never empty");
            Ok(ConversationTurn::assistant(format!("echo: {}", last.content)))
        }
    }

    /// Transcript fake recording every append; can be flipped into a
    /// failing state to exercise the best-effort policy.
    #[derive(Default)]
    struct MemTranscript {
        appends: StdMutex<Vec<Vec<ConversationTurn>>>,
        fail_appends: AtomicBool,
    }

    impl TranscriptStore for MemTranscript {
        async fn initialize(&self) -> Result<(), TranscriptError> {
            Ok(())
        }

        async fn load_all(&self) -> Vec<ConversationTurn> {
            self.appends.lock().unwrap().iter().flatten().cloned().collect()
        }

        async fn append(&self, turns: &[ConversationTurn]) -> Result<(), TranscriptError> {
            if self.fail_appends.load(Ordering::SeqCst) {
                return Err(TranscriptError::Encode("disk full".to_string()));
            }
            self.appends.lock().unwrap().push(turns.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_respond_appends_exactly_the_new_turns() {
        let service = ChatService::start(EchoProvider::new(), MemTranscript::default())
            .await
            .unwrap();

        let answer = service.respond("hi").await.unwrap();
        assert_eq!(answer, "echo: hi");
        assert_eq!(service.turn_count().await, 2);

        let appends = service.transcript.appends.lock().unwrap().clone();
        assert_eq!(appends.len(), 1);
        assert_eq!(appends[0].len(), 2);
        assert_eq!(appends[0][0].content, "hi");
        assert_eq!(appends[0][1].content, "echo: hi");
    }

    #[tokio::test]
    async fn test_second_exchange_flushes_only_its_own_delta() {
        let service = ChatService::start(EchoProvider::new(), MemTranscript::default())
            .await
            .unwrap();

        service.respond("one").await.unwrap();
        service.respond("two").await.unwrap();

        assert_eq!(service.turn_count().await, 4);
        let appends = service.transcript.appends.lock().unwrap().clone();
        assert_eq!(appends.len(), 2);
        // Each flush carries two turns, never the accumulated history.
        assert_eq!(appends[1].len(), 2);
        assert_eq!(appends[1][0].content, "two");
    }

    #[tokio::test]
    async fn test_provider_failure_leaves_no_partial_turns() {
        let provider = EchoProvider::new();
        provider.fail.store(true, Ordering::SeqCst);
        let service = ChatService::start(provider, MemTranscript::default())
            .await
            .unwrap();

        let err = service.respond("hi").await.unwrap_err();
        assert!(matches!(err, ChatError::Completion(_)));
        assert_eq!(service.turn_count().await, 0);
        assert!(service.transcript.appends.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_failure_keeps_turns_in_memory() {
        let transcript = MemTranscript::default();
        transcript.fail_appends.store(true, Ordering::SeqCst);
        let service = ChatService::start(EchoProvider::new(), transcript)
            .await
            .unwrap();

        let answer = service.respond("hi").await.unwrap();
        assert_eq!(answer, "echo: hi");
        // Best-effort persistence: the write failed, memory did not roll back.
        assert_eq!(service.turn_count().await, 2);
        assert!(service.transcript.appends.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_start_replays_persisted_history() {
        let transcript = MemTranscript::default();
        transcript
            .append(&[
                ConversationTurn::human("earlier"),
                ConversationTurn::assistant("echo: earlier"),
            ])
            .await
            .unwrap();

        let service = ChatService::start(EchoProvider::new(), transcript)
            .await
            .unwrap();
        assert_eq!(service.turn_count().await, 2);

        service.respond("again").await.unwrap();
        assert_eq!(service.turn_count().await, 4);
    }
}
