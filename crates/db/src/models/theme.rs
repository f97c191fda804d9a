//! Theme entity and the admin create DTO.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;
use ytauto_core::theme::{validate_hex_color, MAX_THEME_NAME_LEN};
use ytauto_core::types::{DbId, Timestamp};

/// A row from the `themes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Theme {
    pub id: DbId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "prompt_roteiro")]
    pub script_prompt: Option<String>,
    #[serde(rename = "prompt_imagens")]
    pub image_prompt: Option<String>,
    #[serde(rename = "tags_sugeridas")]
    pub suggested_tags: Json<Vec<String>>,
    #[serde(rename = "categoria_youtube")]
    pub youtube_category: Option<String>,
    #[serde(rename = "cor_hex")]
    pub color_hex: Option<String>,
    #[serde(rename = "icone")]
    pub icon: Option<String>,
    #[serde(rename = "ordem_exibicao")]
    pub display_order: i32,
    #[serde(rename = "ativo")]
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a theme through the admin endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTheme {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, max = MAX_THEME_NAME_LEN, message = "must be 1 to 100 characters"))]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "prompt_roteiro", default)]
    pub script_prompt: Option<String>,
    #[serde(rename = "prompt_imagens", default)]
    pub image_prompt: Option<String>,
    #[serde(rename = "tags_sugeridas", default)]
    pub suggested_tags: Vec<String>,
    #[serde(rename = "categoria_youtube", default)]
    pub youtube_category: Option<String>,
    #[serde(rename = "cor_hex", default)]
    #[validate(custom(function = "validate_hex_color"))]
    pub color_hex: Option<String>,
    #[serde(rename = "icone", default)]
    pub icon: Option<String>,
    #[serde(rename = "ordem_exibicao", default)]
    pub display_order: i32,
}
