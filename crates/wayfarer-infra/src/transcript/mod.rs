//! Conversation transcript adapters.

pub mod jsonl;

pub use jsonl::JsonlTranscript;
