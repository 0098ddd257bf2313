//! Agent file storage.
//!
//! ARCHITECTURE
//! ============
//! Every backend implements the narrow `AgentFileStore` interface: list in
//! insertion order, look up by id, append. The concrete backend is picked
//! once at startup from config and shared through `AppState`.

pub mod file;
pub mod memory;
pub mod postgres;
pub mod seed;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::config::StoreConfig;
use crate::state::AgentFile;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed record at {}:{line}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl crate::error::ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "E_STORE_IO",
            Self::Malformed { .. } => "E_STORE_MALFORMED",
            Self::Encode(_) => "E_STORE_ENCODE",
            Self::Database(_) => "E_DATABASE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Database(_))
    }
}

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Backend-neutral async store for agent files. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AgentFileStore: Send + Sync {
    /// Every stored file, oldest append first.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read.
    async fn list(&self) -> Result<Vec<AgentFile>, StoreError>;

    /// The file with `id`, if present.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read.
    async fn find_by_id(&self, id: &str) -> Result<Option<AgentFile>, StoreError>;

    /// Append a new file at the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be written.
    async fn append(&self, file: AgentFile) -> Result<(), StoreError>;
}

/// Which backend to construct at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    File,
    Postgres,
}

impl StoreKind {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "memory" => Some(Self::Memory),
            "file" => Some(Self::File),
            "postgres" => Some(Self::Postgres),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::File => "file",
            Self::Postgres => "postgres",
        }
    }
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// Build the configured backend, seeding it with sample files when asked.
///
/// # Errors
///
/// Returns a [`StoreError`] if the file cannot be seeded or the database
/// cannot be reached or migrated.
pub async fn open(config: &StoreConfig) -> Result<Arc<dyn AgentFileStore>, StoreError> {
    let store: Arc<dyn AgentFileStore> = match config {
        StoreConfig::Memory { seed: with_samples } => {
            if *with_samples {
                Arc::new(memory::MemoryStore::seeded())
            } else {
                Arc::new(memory::MemoryStore::new())
            }
        }
        StoreConfig::File { path, seed: with_samples } => {
            let store = file::FileStore::new(path.clone());
            if *with_samples {
                store.seed_if_missing(&seed::sample_agent_files()).await?;
            }
            Arc::new(store)
        }
        StoreConfig::Postgres { database_url, max_connections, seed: with_samples } => {
            let pool = crate::db::init_pool(database_url, *max_connections).await?;
            let store = postgres::PgStore::new(pool);
            if *with_samples && store.seed_if_empty(&seed::sample_agent_files()).await? {
                info!("seeded agent_files table");
            }
            Arc::new(store)
        }
    };

    info!(store = config.kind().as_str(), "agent file store ready");
    Ok(store)
}
