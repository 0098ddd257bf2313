//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the agent file store behind a trait object, so handlers never
//! know whether files live in memory, in a JSON-lines file, or in Postgres.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::AgentFileStore;

/// Author recorded for every post until accounts exist.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

// =============================================================================
// AGENT FILE
// =============================================================================

/// A shared agent configuration file. Mirrors the `agent_files` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentFile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub content: String,
    /// `YYYY-MM-DD`.
    pub date_posted: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AgentFileStore>,
    /// Page size used when a list request does not ask for one.
    pub page_size: usize,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn AgentFileStore>, page_size: usize) -> Self {
        Self { store, page_size }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
