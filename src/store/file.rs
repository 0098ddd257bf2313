//! JSON-lines agent file store.
//!
//! DESIGN
//! ======
//! One `AgentFile` per line, appended in insertion order. Reads parse the
//! whole file on every call; a missing file reads as an empty collection.
//! Appends go through a mutex so concurrent posts never interleave bytes
//! within a line.
//!
//! ERROR HANDLING
//! ==============
//! A line that fails to parse aborts the read with its 1-based line number
//! rather than silently dropping the record. Blank lines are skipped.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::info;

use super::{AgentFileStore, StoreError};
use crate::state::AgentFile;

pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    /// Write `files` as the initial contents if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the file cannot be created or written.
    pub async fn seed_if_missing(&self, files: &[AgentFile]) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(false);
        }

        let mut body = String::new();
        for file in files {
            body.push_str(&encode_line(file)?);
        }
        tokio::fs::write(&self.path, body).await?;
        info!(path = %self.path.display(), count = files.len(), "seeded agent file store");
        Ok(true)
    }

    async fn read_all(&self) -> Result<Vec<AgentFile>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        parse_lines(&self.path, &raw)
    }
}

/// Parse JSON-lines text into agent files.
pub(crate) fn parse_lines(path: &Path, raw: &str) -> Result<Vec<AgentFile>, StoreError> {
    let mut files = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let file = serde_json::from_str(line)
            .map_err(|source| StoreError::Malformed { path: path.to_path_buf(), line: idx + 1, source })?;
        files.push(file);
    }
    Ok(files)
}

fn encode_line(file: &AgentFile) -> Result<String, StoreError> {
    let mut line = serde_json::to_string(file)?;
    line.push('\n');
    Ok(line)
}

#[async_trait::async_trait]
impl AgentFileStore for FileStore {
    async fn list(&self) -> Result<Vec<AgentFile>, StoreError> {
        self.read_all().await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<AgentFile>, StoreError> {
        Ok(self.read_all().await?.into_iter().find(|f| f.id == id))
    }

    async fn append(&self, file: AgentFile) -> Result<(), StoreError> {
        let line = encode_line(&file)?;
        let _guard = self.write_lock.lock().await;
        let mut handle = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        handle.write_all(line.as_bytes()).await?;
        handle.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;
