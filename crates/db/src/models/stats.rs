//! Read-only aggregate rows for the statistics endpoint.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use ytauto_core::types::{DbId, Timestamp};

/// Project counts per status bucket over a trailing window.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusSummary {
    #[serde(rename = "total_projetos")]
    pub total_projects: i64,
    #[serde(rename = "concluidos")]
    pub completed: i64,
    #[serde(rename = "com_erro")]
    pub errored: i64,
    #[serde(rename = "publicados")]
    pub published: i64,
    #[serde(rename = "em_andamento")]
    pub in_progress: i64,
    /// Mean `processing_time_secs`; `None` when no project in the window has one.
    #[serde(rename = "tempo_medio_processamento")]
    pub avg_processing_secs: Option<f64>,
}

/// Per-theme project counts over the monthly window.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ThemeBreakdown {
    #[serde(rename = "tema_id")]
    pub theme_id: DbId,
    #[serde(rename = "tema")]
    pub theme_name: String,
    #[serde(rename = "cor")]
    pub color_hex: Option<String>,
    #[serde(rename = "total_videos")]
    pub total_videos: i64,
    #[serde(rename = "videos_publicados")]
    pub published_videos: i64,
}

/// Project counts for one calendar day.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyBreakdown {
    #[serde(rename = "data")]
    pub day: NaiveDate,
    pub total: i64,
    #[serde(rename = "concluidos")]
    pub completed: i64,
    #[serde(rename = "com_erro")]
    pub errored: i64,
}

/// Storage used per file type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FileTypeUsage {
    #[serde(rename = "tipo_arquivo")]
    pub file_type: String,
    #[serde(rename = "total_arquivos")]
    pub file_count: i64,
    #[serde(rename = "tamanho_total_bytes")]
    pub total_bytes: i64,
}

/// A failed step from `process_logs`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecentError {
    #[serde(rename = "projeto_id")]
    pub project_id: DbId,
    #[serde(rename = "etapa")]
    pub step: String,
    #[serde(rename = "mensagem")]
    pub message: Option<String>,
    #[serde(rename = "tema")]
    pub theme_name: Option<String>,
    pub created_at: Timestamp,
}

/// Everything `GET /api/stats` returns.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    #[serde(rename = "geral")]
    pub monthly: StatusSummary,
    #[serde(rename = "ultimos_7_dias")]
    pub weekly: StatusSummary,
    #[serde(rename = "por_tema")]
    pub by_theme: Vec<ThemeBreakdown>,
    #[serde(rename = "por_dia")]
    pub by_day: Vec<DailyBreakdown>,
    #[serde(rename = "por_tipo_arquivo")]
    pub by_file_type: Vec<FileTypeUsage>,
    #[serde(rename = "erros_recentes")]
    pub recent_errors: Vec<RecentError>,
}
