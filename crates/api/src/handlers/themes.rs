//! Handlers for reading content themes.
//!
//! Only active themes are ever visible here; an inactive theme answers
//! exactly like a missing one.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use ytauto_core::error::CoreError;
use ytauto_core::types::DbId;
use ytauto_db::repositories::ThemeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/themes
///
/// List active themes ordered by display order, then name.
pub async fn list_themes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let themes = ThemeRepo::list_active(&state.pool).await?;

    Ok(Json(ApiResponse::ok(themes)))
}

/// GET /api/themes/{id}
pub async fn get_theme(
    State(state): State<AppState>,
    AppPath(theme_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let theme = ThemeRepo::find_active_by_id(&state.pool, theme_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Theme",
            id: theme_id,
        }))?;

    Ok(Json(ApiResponse::ok(theme)))
}
