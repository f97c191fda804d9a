//! Handler for the aggregate statistics report.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use ytauto_core::stats::{MONTHLY_WINDOW_DAYS, RECENT_ERROR_LIMIT, WEEKLY_WINDOW_DAYS};
use ytauto_db::models::stats::StatsReport;
use ytauto_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/stats
///
/// Runs the report queries concurrently; each one takes its own pooled
/// connection, so the sections are not one consistent snapshot.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;

    let (monthly, weekly, by_theme, by_day, by_file_type, recent_errors) = tokio::try_join!(
        StatsRepo::status_summary(pool, MONTHLY_WINDOW_DAYS),
        StatsRepo::status_summary(pool, WEEKLY_WINDOW_DAYS),
        StatsRepo::by_theme(pool, MONTHLY_WINDOW_DAYS),
        StatsRepo::by_day(pool, WEEKLY_WINDOW_DAYS),
        StatsRepo::by_file_type(pool, MONTHLY_WINDOW_DAYS),
        StatsRepo::recent_errors(pool, RECENT_ERROR_LIMIT),
    )?;

    Ok(Json(ApiResponse::ok(StatsReport {
        monthly,
        weekly,
        by_theme,
        by_day,
        by_file_type,
        recent_errors,
    })))
}
