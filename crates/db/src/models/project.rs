//! Project rows as listed by the API, joined with their theme.

use serde::Serialize;
use sqlx::FromRow;
use ytauto_core::types::{DbId, Timestamp};

/// A `projects` row with the owning theme's name and color.
///
/// Theme columns are `None` when the project has no theme or the theme row
/// is gone.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectWithTheme {
    pub id: DbId,
    #[serde(rename = "tema_id")]
    pub theme_id: Option<DbId>,
    pub status: String,
    #[serde(rename = "processing_time")]
    pub processing_time_secs: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(rename = "tema_nome")]
    pub theme_name: Option<String>,
    #[serde(rename = "tema_cor")]
    pub theme_color: Option<String>,
}
