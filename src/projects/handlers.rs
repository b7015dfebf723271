//! Project endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::http::response::{ApiError, ApiResponse};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::projects::types::{CreateProject, Project};
use crate::validation::status_matches;

#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    pub status: Option<String>,
}

/// `GET /api/projects` — all projects, optionally filtered by status.
///
/// An empty or all-whitespace filter is ignored. An empty result set is a
/// valid success, not an error.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> Result<Json<ApiResponse<Vec<Project>>>, ApiError> {
    let mut projects = state.store.projects()?;

    if let Some(filter) = query.status.as_deref() {
        if !filter.trim().is_empty() {
            projects.retain(|p| status_matches(&p.status, filter));
        }
    }

    Ok(Json(ApiResponse::list(projects)))
}

/// `GET /api/projects/{id}` — a single project, 404 with the id echoed back
/// when unknown.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    match state.store.project_by_id(&id)? {
        Some(project) => Ok(Json(ApiResponse::record(project))),
        None => Err(ApiError::ProjectNotFound { id }),
    }
}

/// `POST /api/projects` — insert a project, defaulting the status.
///
/// Name and chain content are deliberately not validated; the tracker
/// accepts whatever labels the caller supplies.
pub async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<CreateProject>,
) -> Result<(StatusCode, Json<ApiResponse<Project>>), ApiError> {
    let project = state.store.add_project(&body)?;

    tracing::info!(
        project_id = %project.id,
        chain = %project.chain,
        status = %project.status,
        "Project created"
    );
    metrics::record_project_created(&project.chain);

    Ok((StatusCode::CREATED, Json(ApiResponse::record(project))))
}
