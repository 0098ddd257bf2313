//! Postgres-backed agent file store.
//!
//! Insertion order is kept by the `seq` identity column; `list` orders by it
//! so every backend returns files in the same order.

use sqlx::PgPool;

use super::{AgentFileStore, StoreError};
use crate::state::AgentFile;

/// Advisory lock key held while seeding.
const SEED_LOCK_KEY: i64 = 0x4147_454e_5446_494c;

const SEED_INSERT_SQL: &str = "INSERT INTO agent_files (id, name, description, content, date_posted, author, tags)
     VALUES ($1, $2, $3, $4, $5, $6, $7)
     ON CONFLICT (id) DO NOTHING";

type AgentFileRow = (String, String, String, String, String, String, Option<Vec<String>>);

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert `files` when the table is empty. Returns whether anything was written.
    ///
    /// Runs in one transaction under an advisory lock so instances starting
    /// together seed the table once.
    ///
    /// # Errors
    ///
    /// Returns a database error if the lock, count, or inserts fail.
    pub async fn seed_if_empty(&self, files: &[AgentFile]) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SEED_LOCK_KEY)
            .execute(&mut *tx)
            .await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM agent_files")
            .fetch_one(&mut *tx)
            .await?;
        if count > 0 {
            return Ok(false);
        }

        for file in files {
            sqlx::query(SEED_INSERT_SQL)
                .bind(&file.id)
                .bind(&file.name)
                .bind(&file.description)
                .bind(&file.content)
                .bind(&file.date_posted)
                .bind(&file.author)
                .bind(&file.tags)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(true)
    }
}

fn row_to_file(row: AgentFileRow) -> AgentFile {
    let (id, name, description, content, date_posted, author, tags) = row;
    AgentFile { id, name, description, content, date_posted, author, tags }
}

#[async_trait::async_trait]
impl AgentFileStore for PgStore {
    async fn list(&self) -> Result<Vec<AgentFile>, StoreError> {
        let rows = sqlx::query_as::<_, AgentFileRow>(
            "SELECT id, name, description, content, date_posted, author, tags
             FROM agent_files
             ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(row_to_file).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<AgentFile>, StoreError> {
        let row = sqlx::query_as::<_, AgentFileRow>(
            "SELECT id, name, description, content, date_posted, author, tags
             FROM agent_files
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(row_to_file))
    }

    async fn append(&self, file: AgentFile) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO agent_files (id, name, description, content, date_posted, author, tags)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&file.id)
        .bind(&file.name)
        .bind(&file.description)
        .bind(&file.content)
        .bind(&file.date_posted)
        .bind(&file.author)
        .bind(&file.tags)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
