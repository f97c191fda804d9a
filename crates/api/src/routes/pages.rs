//! HTML pages served from the public directory.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeFile;

use crate::state::AppState;

/// Mount the selection UI, the dashboard, and the API docs page.
///
/// ```text
/// /          -> index.html
/// /stats     -> stats.html
/// /api-docs  -> api-docs.html
/// ```
pub fn router(public_dir: &Path) -> Router<AppState> {
    tracing::debug!(path = %public_dir.display(), "Serving pages from public directory");

    Router::new()
        .route_service("/", ServeFile::new(public_dir.join("index.html")))
        .route_service("/stats", ServeFile::new(public_dir.join("stats.html")))
        .route_service("/api-docs", ServeFile::new(public_dir.join("api-docs.html")))
}
