//! Agent file service — list, fetch, post, and browse.
//!
//! DESIGN
//! ======
//! Operations take the store as `&dyn AgentFileStore` so they run the same
//! against memory, file, and Postgres backends. Browsing loads the full
//! collection, filters and sorts it, then hands it to the pagination
//! calculator; collections are small enough that this stays cheap.

use std::cmp::Ordering;

use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use crate::error::ErrorCode;
use crate::pagination::{PaginatedResponse, calculate_pagination};
use crate::services::validation::{self, AgentFileForm, FieldErrors};
use crate::state::{ANONYMOUS_AUTHOR, AgentFile};
use crate::store::{AgentFileStore, StoreError};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AgentFileError {
    #[error("agent file not found: {0}")]
    NotFound(String),
    #[error("agent file id is required")]
    InvalidId,
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("invalid query")]
    InvalidQuery(FieldErrors),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ErrorCode for AgentFileError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_AGENT_FILE_NOT_FOUND",
            Self::InvalidId => "E_INVALID_ID",
            Self::Validation(_) => "E_VALIDATION",
            Self::InvalidQuery(_) => "E_INVALID_QUERY",
            Self::Store(_) => "E_STORE",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Store(e) => e.retryable(),
            _ => false,
        }
    }
}

/// Ordering applied before pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Newest,
    Oldest,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            "name-asc" => Some(Self::NameAsc),
            "name-desc" => Some(Self::NameDesc),
            _ => None,
        }
    }

    fn compare(self, a: &AgentFile, b: &AgentFile) -> Ordering {
        match self {
            Self::Newest => b.date_posted.cmp(&a.date_posted),
            Self::Oldest => a.date_posted.cmp(&b.date_posted),
            Self::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::NameDesc => b.name.to_lowercase().cmp(&a.name.to_lowercase()),
        }
    }
}

/// Parameters for one page of a browse request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseQuery {
    pub page: i64,
    pub page_size: usize,
    pub search: Option<String>,
    /// `None` keeps store order.
    pub sort: Option<SortOrder>,
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Every stored agent file, in store order.
///
/// # Errors
///
/// Returns a store error if the backend cannot be read.
pub async fn list_agent_files(store: &dyn AgentFileStore) -> Result<Vec<AgentFile>, AgentFileError> {
    Ok(store.list().await?)
}

/// Fetch one agent file by id.
///
/// # Errors
///
/// Returns `InvalidId` for a blank id, `NotFound` if no file matches, or a
/// store error if the backend cannot be read.
pub async fn get_agent_file(store: &dyn AgentFileStore, id: &str) -> Result<AgentFile, AgentFileError> {
    if id.trim().is_empty() {
        return Err(AgentFileError::InvalidId);
    }
    store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AgentFileError::NotFound(id.to_string()))
}

/// Validate a form, create the agent file, and append it to the store.
///
/// # Errors
///
/// Returns `Validation` with per-field messages, or a store error if the
/// append fails.
pub async fn post_agent_file(store: &dyn AgentFileStore, form: AgentFileForm) -> Result<AgentFile, AgentFileError> {
    let valid = validation::validate_agent_file_form(form).map_err(AgentFileError::Validation)?;

    let file = AgentFile {
        id: Uuid::new_v4().to_string(),
        name: valid.name,
        description: valid.description,
        content: valid.content,
        date_posted: today(),
        author: ANONYMOUS_AUTHOR.to_string(),
        tags: None,
    };
    store.append(file.clone()).await?;

    info!(id = %file.id, name = %file.name, "agent file posted");
    Ok(file)
}

/// Filter, sort, and paginate the stored agent files.
///
/// # Errors
///
/// Returns `InvalidQuery` for an over-long search string, or a store error
/// if the backend cannot be read.
pub async fn browse_agent_files(
    store: &dyn AgentFileStore,
    query: &BrowseQuery,
) -> Result<PaginatedResponse<AgentFile>, AgentFileError> {
    if let Some(search) = query.search.as_deref() {
        validation::validate_search_query(search).map_err(AgentFileError::InvalidQuery)?;
    }

    let files = list_agent_files(store).await?;
    let files = filter_and_sort(files, query.search.as_deref(), query.sort);
    Ok(calculate_pagination(&files, query.page, query.page_size))
}

/// Keep files whose name or description contains `search` (case-insensitive),
/// then apply a stable sort.
#[must_use]
pub fn filter_and_sort(files: Vec<AgentFile>, search: Option<&str>, sort: Option<SortOrder>) -> Vec<AgentFile> {
    let needle = search.map(str::trim).filter(|s| !s.is_empty()).map(str::to_lowercase);

    let mut files: Vec<AgentFile> = match needle {
        Some(needle) => files
            .into_iter()
            .filter(|f| f.name.to_lowercase().contains(&needle) || f.description.to_lowercase().contains(&needle))
            .collect(),
        None => files,
    };

    if let Some(order) = sort {
        files.sort_by(|a, b| order.compare(a, b));
    }
    files
}

/// Today's UTC date as `YYYY-MM-DD`.
fn today() -> String {
    OffsetDateTime::now_utc().date().to_string()
}

#[cfg(test)]
#[path = "agent_file_test.rs"]
mod tests;
