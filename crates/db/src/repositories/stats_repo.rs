//! Reporting queries over `projects`, `project_files`, and `process_logs`.
//!
//! All queries are reads over trailing windows measured from `now()`.

use sqlx::PgPool;
use ytauto_core::project_status::{StatusBucket, STATUS_ERROR, STATUS_PUBLISHED};

use crate::models::stats::{
    DailyBreakdown, FileTypeUsage, RecentError, StatusSummary, ThemeBreakdown,
};

/// Provides the aggregate queries behind the statistics endpoint.
pub struct StatsRepo;

impl StatsRepo {
    /// Count projects per status bucket created within the last `window_days`.
    pub async fn status_summary(
        pool: &PgPool,
        window_days: i32,
    ) -> Result<StatusSummary, sqlx::Error> {
        let query = "\
            SELECT \
                COUNT(*) AS total_projects, \
                COUNT(*) FILTER (WHERE status = ANY($2)) AS completed, \
                COUNT(*) FILTER (WHERE status = ANY($3)) AS errored, \
                COUNT(*) FILTER (WHERE status = ANY($4)) AS published, \
                COUNT(*) FILTER (WHERE status = ANY($5)) AS in_progress, \
                AVG(processing_time_secs)::FLOAT8 AS avg_processing_secs \
            FROM projects \
            WHERE created_at >= now() - make_interval(days => $1)";
        sqlx::query_as::<_, StatusSummary>(query)
            .bind(window_days)
            .bind(StatusBucket::Completed.statuses())
            .bind(StatusBucket::Errored.statuses())
            .bind(StatusBucket::Published.statuses())
            .bind(StatusBucket::InProgress.statuses())
            .fetch_one(pool)
            .await
    }

    /// Per active theme: projects and published projects in the window.
    ///
    /// Themes without projects are included with zero counts.
    pub async fn by_theme(
        pool: &PgPool,
        window_days: i32,
    ) -> Result<Vec<ThemeBreakdown>, sqlx::Error> {
        let query = "\
            SELECT \
                t.id AS theme_id, \
                t.name AS theme_name, \
                t.color_hex, \
                COUNT(p.id) AS total_videos, \
                COUNT(p.id) FILTER (WHERE p.status = $2) AS published_videos \
            FROM themes t \
            LEFT JOIN projects p ON p.theme_id = t.id \
                AND p.created_at >= now() - make_interval(days => $1) \
            WHERE t.is_active = TRUE \
            GROUP BY t.id, t.name, t.color_hex \
            ORDER BY total_videos DESC, t.name";
        sqlx::query_as::<_, ThemeBreakdown>(query)
            .bind(window_days)
            .bind(STATUS_PUBLISHED)
            .fetch_all(pool)
            .await
    }

    /// One row per calendar day for the last `days` days, oldest first.
    ///
    /// Days without projects are present with zero counts.
    pub async fn by_day(pool: &PgPool, days: i32) -> Result<Vec<DailyBreakdown>, sqlx::Error> {
        let query = "\
            SELECT \
                d.day::DATE AS day, \
                COUNT(p.id) AS total, \
                COUNT(p.id) FILTER (WHERE p.status = ANY($2)) AS completed, \
                COUNT(p.id) FILTER (WHERE p.status = ANY($3)) AS errored \
            FROM generate_series( \
                CURRENT_DATE - ($1::INT - 1), CURRENT_DATE, INTERVAL '1 day' \
            ) AS d(day) \
            LEFT JOIN projects p ON p.created_at::DATE = d.day::DATE \
            GROUP BY d.day \
            ORDER BY d.day";
        sqlx::query_as::<_, DailyBreakdown>(query)
            .bind(days)
            .bind(StatusBucket::Completed.statuses())
            .bind(StatusBucket::Errored.statuses())
            .fetch_all(pool)
            .await
    }

    /// File count and total bytes per file type in the window, largest first.
    pub async fn by_file_type(
        pool: &PgPool,
        window_days: i32,
    ) -> Result<Vec<FileTypeUsage>, sqlx::Error> {
        let query = "\
            SELECT \
                file_type, \
                COUNT(*) AS file_count, \
                COALESCE(SUM(size_bytes), 0)::BIGINT AS total_bytes \
            FROM project_files \
            WHERE created_at >= now() - make_interval(days => $1) \
            GROUP BY file_type \
            ORDER BY total_bytes DESC, file_type";
        sqlx::query_as::<_, FileTypeUsage>(query)
            .bind(window_days)
            .fetch_all(pool)
            .await
    }

    /// The newest failed process-log entries.
    pub async fn recent_errors(pool: &PgPool, limit: i64) -> Result<Vec<RecentError>, sqlx::Error> {
        let query = "\
            SELECT \
                l.project_id, l.step, l.message, \
                t.name AS theme_name, l.created_at \
            FROM process_logs l \
            LEFT JOIN projects p ON p.id = l.project_id \
            LEFT JOIN themes t ON t.id = p.theme_id \
            WHERE l.status = $1 \
            ORDER BY l.created_at DESC, l.id DESC \
            LIMIT $2";
        sqlx::query_as::<_, RecentError>(query)
            .bind(STATUS_ERROR)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
