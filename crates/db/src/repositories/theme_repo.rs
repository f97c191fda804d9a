//! Repository for the `themes` table.
//!
//! Themes are never hard-deleted; every read here filters on `is_active`.

use sqlx::types::Json;
use sqlx::PgPool;
use ytauto_core::types::DbId;

use crate::models::theme::{CreateTheme, Theme};

/// Column list for `themes` queries.
const COLUMNS: &str = "\
    id, name, description, script_prompt, image_prompt, suggested_tags, \
    youtube_category, color_hex, icon, display_order, is_active, \
    created_at, updated_at";

/// Provides data access for content themes.
pub struct ThemeRepo;

impl ThemeRepo {
    /// List active themes in display order, then by name.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Theme>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM themes \
             WHERE is_active = TRUE \
             ORDER BY display_order, name"
        );
        sqlx::query_as::<_, Theme>(&query).fetch_all(pool).await
    }

    /// Find an active theme by ID. Inactive themes are reported as absent.
    pub async fn find_active_by_id(pool: &PgPool, id: DbId) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM themes WHERE id = $1 AND is_active = TRUE");
        sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new theme and return its generated ID.
    pub async fn create(pool: &PgPool, dto: &CreateTheme) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO themes \
                 (name, description, script_prompt, image_prompt, suggested_tags, \
                  youtube_category, color_hex, icon, display_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING id",
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(&dto.script_prompt)
        .bind(&dto.image_prompt)
        .bind(Json(&dto.suggested_tags))
        .bind(&dto.youtube_category)
        .bind(&dto.color_hex)
        .bind(&dto.icon)
        .bind(dto.display_order)
        .fetch_one(pool)
        .await
    }
}
