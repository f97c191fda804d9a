//! Repository for reading `projects`.
//!
//! Projects are written by the automation workflow; this API only lists them.

use sqlx::PgPool;

use crate::models::project::ProjectWithTheme;

/// Provides read access to video projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List projects newest first, optionally filtered by status.
    ///
    /// `limit` is expected to be clamped by the caller.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
    ) -> Result<Vec<ProjectWithTheme>, sqlx::Error> {
        sqlx::query_as::<_, ProjectWithTheme>(
            "SELECT p.id, p.theme_id, p.status, p.processing_time_secs, \
                    p.created_at, p.updated_at, \
                    t.name AS theme_name, t.color_hex AS theme_color \
             FROM projects p \
             LEFT JOIN themes t ON t.id = p.theme_id \
             WHERE ($1::TEXT IS NULL OR p.status = $1) \
             ORDER BY p.created_at DESC, p.id DESC \
             LIMIT $2",
        )
        .bind(status)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
