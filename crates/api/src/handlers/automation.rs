//! Handler that starts the external video automation for a theme.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use ytauto_automation::AutomationPayload;
use ytauto_core::error::CoreError;
use ytauto_core::types::{DbId, Timestamp};
use ytauto_db::repositories::ThemeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Body of `POST /api/start-automation`.
#[derive(Debug, Deserialize)]
pub struct StartAutomationRequest {
    #[serde(default)]
    pub tema_id: Option<DbId>,
}

/// Data returned once the webhook accepted the trigger.
#[derive(Debug, Serialize)]
pub struct AutomationStarted {
    #[serde(rename = "tema")]
    pub theme_name: String,
    pub timestamp: Timestamp,
    /// Whatever the workflow engine answered.
    pub n8n_response: serde_json::Value,
}

/// POST /api/start-automation
///
/// Validates that the theme exists and is active, then forwards
/// `{tema_id, tema_nome, timestamp, source}` to the webhook. The workflow's
/// later progress is not tracked here.
pub async fn start_automation(
    State(state): State<AppState>,
    AppJson(input): AppJson<StartAutomationRequest>,
) -> AppResult<impl IntoResponse> {
    let theme_id = match input.tema_id {
        Some(id) if id != 0 => id,
        _ => return Err(AppError::BadRequest("tema_id is required".into())),
    };

    let theme = ThemeRepo::find_active_by_id(&state.pool, theme_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Theme",
            id: theme_id,
        }))?;

    let payload = AutomationPayload::new(theme.id, theme.name);
    let upstream = state.automation.trigger(&payload).await?;

    tracing::info!(
        theme_id = payload.theme_id,
        theme_name = %payload.theme_name,
        webhook = %state.automation.webhook_url(),
        "Automation triggered",
    );

    let data = AutomationStarted {
        theme_name: payload.theme_name,
        timestamp: payload.timestamp,
        n8n_response: upstream,
    };
    Ok(Json(
        ApiResponse::ok(data).with_message("Automation started successfully"),
    ))
}
