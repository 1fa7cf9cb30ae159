//! Application state wiring all services together.
//!
//! Services are generic over repository/store/provider traits, but AppState
//! pins them to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use wayfarer_core::chat::service::ChatService;
use wayfarer_core::trip::service::TripService;
use wayfarer_infra::config::{resolve_data_dir, AppConfig};
use wayfarer_infra::llm::openai::OpenAiChatProvider;
use wayfarer_infra::sqlite::pool::DatabasePool;
use wayfarer_infra::sqlite::trip::SqliteTripRepository;
use wayfarer_infra::transcript::jsonl::JsonlTranscript;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteChatService = ChatService<OpenAiChatProvider, JsonlTranscript>;
pub type ConcreteTripService = TripService<SqliteTripRepository>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub trip_service: Arc<ConcreteTripService>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to the DB, replay the
    /// conversation transcript, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        // Initialize database
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("wayfarer.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        // Wire trip service
        let trip_service = TripService::new(SqliteTripRepository::new(db_pool.clone()));

        // Wire chat service: provider from env config, transcript replayed
        // from disk before the first request arrives.
        let config = AppConfig::from_env()?;
        let provider = OpenAiChatProvider::from_config(&config);
        let transcript = JsonlTranscript::new(data_dir.join("chat_history.jsonl"));
        let chat_service = ChatService::start(provider, transcript).await?;

        tracing::info!(data_dir = %data_dir.display(), "Application state initialized");

        Ok(Self {
            chat_service: Arc::new(chat_service),
            trip_service: Arc::new(trip_service),
            data_dir,
            db_pool,
        })
    }
}
