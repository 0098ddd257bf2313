//! Service configuration parsed from environment variables.

use std::path::PathBuf;

use crate::pagination::{DEFAULT_PAGE_SIZE, clamp_page_size};
use crate::store::StoreKind;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AGENT_FILES_PATH: &str = "agent_files.jsonl";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown AGENT_FILES_STORE: {0} (expected memory, file, or postgres)")]
    UnknownStore(String),
    #[error("DATABASE_URL required when AGENT_FILES_STORE=postgres")]
    MissingDatabaseUrl,
}

/// Where agent files are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Memory { seed: bool },
    File { path: PathBuf, seed: bool },
    Postgres { database_url: String, max_connections: u32, seed: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub page_size: usize,
    pub store: StoreConfig,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AGENT_FILES_STORE`: `memory` (default), `file`, or `postgres`
    /// - `AGENT_FILES_PATH`: JSON-lines path for the file store
    /// - `DATABASE_URL`: required for the postgres store
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `AGENT_FILES_PAGE_SIZE`: default 12, clamped to 10..=20
    /// - `AGENT_FILES_SEED`: default true
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unknown store kind or a postgres
    /// store without `DATABASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(lookup("PORT"), DEFAULT_PORT);
        let page_size = clamp_page_size(parse_or(lookup("AGENT_FILES_PAGE_SIZE"), DEFAULT_PAGE_SIZE));
        let seed = parse_bool(lookup("AGENT_FILES_SEED").as_deref(), true);

        let kind = match lookup("AGENT_FILES_STORE") {
            None => StoreKind::Memory,
            Some(raw) => StoreKind::parse(&raw).ok_or(ConfigError::UnknownStore(raw))?,
        };

        let store = match kind {
            StoreKind::Memory => StoreConfig::Memory { seed },
            StoreKind::File => StoreConfig::File {
                path: lookup("AGENT_FILES_PATH").map_or_else(|| PathBuf::from(DEFAULT_AGENT_FILES_PATH), PathBuf::from),
                seed,
            },
            StoreKind::Postgres => StoreConfig::Postgres {
                database_url: lookup("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?,
                max_connections: parse_or(lookup("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS),
                seed,
            },
        };

        Ok(Self { port, page_size, store })
    }
}

impl StoreConfig {
    #[must_use]
    pub fn kind(&self) -> StoreKind {
        match self {
            Self::Memory { .. } => StoreKind::Memory,
            Self::File { .. } => StoreKind::File,
            Self::Postgres { .. } => StoreKind::Postgres,
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

fn parse_bool(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
