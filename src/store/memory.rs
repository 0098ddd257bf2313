//! In-memory agent file store.
//!
//! Files live in a `Vec` behind a tokio `RwLock`. Contents are lost on
//! restart.

use tokio::sync::RwLock;

use super::{AgentFileStore, StoreError, seed};
use crate::state::AgentFile;

pub struct MemoryStore {
    files: RwLock<Vec<AgentFile>>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_files(Vec::new())
    }

    /// Store pre-populated with the sample agent files.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_files(seed::sample_agent_files())
    }

    /// Store holding `files`, in order.
    #[must_use]
    pub fn with_files(files: Vec<AgentFile>) -> Self {
        Self { files: RwLock::new(files) }
    }

    /// Replace the contents with the sample agent files.
    #[allow(dead_code)]
    pub async fn reset(&self) {
        *self.files.write().await = seed::sample_agent_files();
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AgentFileStore for MemoryStore {
    async fn list(&self) -> Result<Vec<AgentFile>, StoreError> {
        Ok(self.files.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<AgentFile>, StoreError> {
        Ok(self.files.read().await.iter().find(|f| f.id == id).cloned())
    }

    async fn append(&self, file: AgentFile) -> Result<(), StoreError> {
        self.files.write().await.push(file);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
