//! Postman collection and environment downloads.

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub const POSTMAN_COLLECTION_FILE: &str = "postman_collection.json";
pub const POSTMAN_ENVIRONMENT_FILE: &str = "postman_environment.json";

/// GET /api/postman-collection
pub async fn postman_collection(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    send_attachment(&state, POSTMAN_COLLECTION_FILE).await
}

/// GET /api/postman-environment
pub async fn postman_environment(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    send_attachment(&state, POSTMAN_ENVIRONMENT_FILE).await
}

/// Read a JSON file from the public directory and send it as a download.
async fn send_attachment(state: &AppState, file_name: &'static str) -> AppResult<impl IntoResponse> {
    let path = state.config.public_dir.join(file_name);
    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound(format!("{file_name} not found"))
        } else {
            AppError::InternalError(format!("reading {}: {e}", path.display()))
        }
    })?;

    Ok((
        [
            (CONTENT_TYPE, "application/json".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    ))
}
