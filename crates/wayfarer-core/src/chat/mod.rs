//! Chat service and conversation transcript abstraction.

pub mod service;
pub mod transcript;

pub use service::ChatService;
pub use transcript::TranscriptStore;
