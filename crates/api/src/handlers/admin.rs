//! Admin handlers for theme management.
//!
//! Only creation is exposed; themes are retired by flipping `is_active`
//! in the database, never deleted.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;
use ytauto_core::types::DbId;
use ytauto_db::models::theme::CreateTheme;
use ytauto_db::repositories::ThemeRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Payload returned after a theme is created.
#[derive(Debug, Serialize)]
pub struct CreatedId {
    pub id: DbId,
}

/// POST /api/admin/themes
pub async fn create_theme(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTheme>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let id = ThemeRepo::create(&state.pool, &input).await?;

    tracing::info!(theme_id = id, name = %input.name, "Theme created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CreatedId { id }).with_message("Theme created successfully")),
    ))
}
