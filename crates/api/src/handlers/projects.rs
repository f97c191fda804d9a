//! Handler for listing video projects.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use ytauto_core::error::CoreError;
use ytauto_core::pagination::{clamp_limit, DEFAULT_PROJECT_LIMIT, MAX_LIMIT};
use ytauto_core::project_status::ProjectStatus;
use ytauto_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for `GET /api/projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

/// GET /api/projects?status=&limit=
///
/// Newest first. `status` must be one of the known project statuses;
/// `limit` defaults to 20 and is clamped to `[1, 100]`.
pub async fn list_projects(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ProjectListParams>,
) -> AppResult<impl IntoResponse> {
    let status = params
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(ProjectStatus::from_str_value)
        .transpose()
        .map_err(CoreError::Validation)?;
    let limit = clamp_limit(params.limit, DEFAULT_PROJECT_LIMIT, MAX_LIMIT);

    let projects =
        ProjectRepo::list(&state.pool, status.as_ref().map(ProjectStatus::as_str), limit).await?;

    Ok(Json(ApiResponse::ok(projects)))
}
