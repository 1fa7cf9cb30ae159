//! JSONL conversation transcript.
//!
//! Implements `TranscriptStore` from `wayfarer-core` over a plain file:
//! one JSON-serialized turn per line, appended incrementally. All
//! operations go through `tokio::fs` for async I/O.
//!
//! The load path degrades instead of failing: an unparseable line is
//! skipped and an unreadable file loads as empty history, each with its
//! own warning so the two cases stay distinguishable in logs.

use std::path::PathBuf;

use tokio::io::AsyncWriteExt;
use tracing::warn;

use wayfarer_core::chat::transcript::TranscriptStore;
use wayfarer_types::chat::ConversationTurn;
use wayfarer_types::error::TranscriptError;

/// File-backed transcript store, one JSON object per line.
pub struct JsonlTranscript {
    path: PathBuf,
}

impl JsonlTranscript {
    /// Create a store over the given file path. No I/O happens until
    /// `initialize`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TranscriptStore for JsonlTranscript {
    async fn initialize(&self) -> Result<(), TranscriptError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // create_new leaves an existing file untouched, so re-initializing
        // never truncates history.
        match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    async fn load_all(&self) -> Vec<ConversationTurn> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Transcript unreadable, starting with fresh memory"
                );
                return Vec::new();
            }
        };

        let mut turns = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<ConversationTurn>(line) {
                Ok(turn) => turns.push(turn),
                Err(err) => {
                    warn!(line = idx + 1, error = %err, "Skipping unparseable transcript line");
                }
            }
        }

        turns
    }

    async fn append(&self, turns: &[ConversationTurn]) -> Result<(), TranscriptError> {
        if turns.is_empty() {
            return Ok(());
        }

        let mut buf = String::new();
        for turn in turns {
            let line = serde_json::to_string(turn)
                .map_err(|e| TranscriptError::Encode(e.to_string()))?;
            buf.push_str(&line);
            buf.push('\n');
        }

        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;
        file.write_all(buf.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
