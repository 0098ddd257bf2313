//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the agent file JSON API and a health probe under a
//! single Axum router. CORS is open so browser frontends on other origins
//! can call the API directly.

pub mod agent_files;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/agent-files",
            get(agent_files::list_agent_files).post(agent_files::post_agent_file),
        )
        .route("/api/agent-files/{id}", get(agent_files::get_agent_file))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
