//! Agent file REST routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::ErrorCode;
use crate::pagination::{PaginationState, clamp_page_size};
use crate::services::agent_file::{self, AgentFileError, BrowseQuery, SortOrder};
use crate::services::validation::{AgentFileForm, FieldErrors};
use crate::state::{AgentFile, AppState};

const FETCH_LIST_FAILED: &str = "Failed to fetch agent files";
const FETCH_ONE_FAILED: &str = "Failed to fetch agent file";
const POST_FAILED: &str = "Failed to post agent file";

// =============================================================================
// RESPONSE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    fn new(data: T) -> Json<Self> {
        Json(Self { success: true, data })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub success: bool,
    pub error: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<FieldErrors>,
}

/// Error half of every handler: a status plus the JSON error envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Previous/next page numbers for navigation; both `None` on a single page.
#[derive(Debug, Serialize)]
pub struct PageLinks {
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

impl PageLinks {
    fn for_page(state: &PaginationState) -> Self {
        if state.is_single_page() {
            return Self { previous: None, next: None };
        }
        Self { previous: state.previous_page(), next: state.next_page() }
    }
}

#[derive(Debug, Serialize)]
pub struct AgentFilePage {
    pub items: Vec<AgentFile>,
    pub pagination: PaginationState,
    pub links: PageLinks,
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Query string for `GET /api/agent-files`. Kept as raw strings so bad
/// values degrade to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/agent-files` — one page of agent files.
pub async fn list_agent_files(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiSuccess<AgentFilePage>>, ApiError> {
    let query = browse_query(&params, state.page_size).map_err(|e| to_api_error(e, FETCH_LIST_FAILED))?;

    let page = agent_file::browse_agent_files(state.store.as_ref(), &query)
        .await
        .map_err(|e| to_api_error(e, FETCH_LIST_FAILED))?;

    let links = PageLinks::for_page(&page.pagination);
    Ok(ApiSuccess::new(AgentFilePage { items: page.items, pagination: page.pagination, links }))
}

/// `GET /api/agent-files/:id` — fetch one agent file.
pub async fn get_agent_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiSuccess<AgentFile>>, ApiError> {
    let file = agent_file::get_agent_file(state.store.as_ref(), &id)
        .await
        .map_err(|e| to_api_error(e, FETCH_ONE_FAILED))?;
    Ok(ApiSuccess::new(file))
}

/// `POST /api/agent-files` — validate and store a new agent file.
pub async fn post_agent_file(
    State(state): State<AppState>,
    Json(form): Json<AgentFileForm>,
) -> Result<(StatusCode, Json<ApiSuccess<AgentFile>>), ApiError> {
    let file = agent_file::post_agent_file(state.store.as_ref(), form)
        .await
        .map_err(|e| to_api_error(e, POST_FAILED))?;
    Ok((StatusCode::CREATED, ApiSuccess::new(file)))
}

// =============================================================================
// HELPERS
// =============================================================================

/// Translate raw query parameters into a browse request.
///
/// `page` falls back to 1 when missing or unparsable; the pagination
/// calculator clamps whatever is left. `pageSize` is clamped into range.
pub(crate) fn browse_query(params: &ListParams, default_page_size: usize) -> Result<BrowseQuery, AgentFileError> {
    let page = params
        .page
        .as_deref()
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(1);

    let page_size = params
        .page_size
        .as_deref()
        .and_then(|p| p.trim().parse::<usize>().ok())
        .map_or(default_page_size, clamp_page_size);

    let sort = match params.sort.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => None,
        Some(raw) => Some(SortOrder::parse(raw).ok_or_else(|| {
            let mut errors = FieldErrors::new();
            errors.insert("sort".into(), vec!["Sort must be one of newest, oldest, name-asc, name-desc".into()]);
            AgentFileError::InvalidQuery(errors)
        })?),
    };

    Ok(BrowseQuery { page, page_size, search: params.q.clone(), sort })
}

pub(crate) fn agent_file_error_to_status(err: &AgentFileError) -> StatusCode {
    match err {
        AgentFileError::NotFound(_) => StatusCode::NOT_FOUND,
        AgentFileError::InvalidId | AgentFileError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        AgentFileError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AgentFileError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Build the error envelope. Store failures are logged and replaced by
/// `failure_message` so backend details never reach clients.
pub(crate) fn to_api_error(err: AgentFileError, failure_message: &str) -> ApiError {
    let status = agent_file_error_to_status(&err);
    let code = err.error_code();

    let (message, validation_errors) = match err {
        AgentFileError::NotFound(_) => ("Agent file not found".to_string(), None),
        AgentFileError::InvalidId => ("Agent file ID is required".to_string(), None),
        AgentFileError::Validation(fields) => ("Validation failed".to_string(), Some(fields)),
        AgentFileError::InvalidQuery(fields) => ("Invalid query".to_string(), Some(fields)),
        AgentFileError::Store(e) => {
            error!(error = %e, code = e.error_code(), retryable = e.retryable(), "{failure_message}");
            (failure_message.to_string(), None)
        }
    };

    if status.is_client_error() {
        warn!(%status, code, "agent file request rejected");
    }

    ApiError { status, body: ApiErrorBody { success: false, error: message, code, validation_errors } }
}

#[cfg(test)]
#[path = "agent_files_test.rs"]
mod tests;
