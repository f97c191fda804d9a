use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use ytauto_core::types::Timestamp;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status: `ok` or `degraded`.
    pub status: &'static str,
    /// `connected` or `disconnected`.
    pub database: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub timestamp: Timestamp,
}

/// One entry of the endpoint listing in [`InfoResponse`].
#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Static service metadata.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: &'static [EndpointInfo],
}

const fn endpoint(
    method: &'static str,
    path: &'static str,
    description: &'static str,
) -> EndpointInfo {
    EndpointInfo {
        method,
        path,
        description,
    }
}

const ENDPOINTS: &[EndpointInfo] = &[
    endpoint("GET", "/api/themes", "List active themes"),
    endpoint("GET", "/api/themes/{id}", "Fetch one active theme"),
    endpoint(
        "POST",
        "/api/start-automation",
        "Start the video automation for a theme",
    ),
    endpoint("GET", "/api/projects", "List projects (query: status, limit)"),
    endpoint("GET", "/api/stats", "Aggregate project statistics"),
    endpoint("POST", "/api/admin/themes", "Create a theme"),
    endpoint("GET", "/api/health", "Database connectivity probe"),
    endpoint("GET", "/api/info", "Service metadata"),
    endpoint("GET", "/api/postman-collection", "Postman collection download"),
    endpoint("GET", "/api/postman-environment", "Postman environment download"),
];

/// GET /api/health -- returns service and database health.
///
/// Answers 503 with `success: false` when the database ping fails.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_result = ytauto_db::health_check(&state.pool).await;

    let healthy = db_result.is_ok();
    let body = HealthResponse {
        status: if healthy { "ok" } else { "degraded" },
        database: if healthy { "connected" } else { "disconnected" },
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now(),
    };

    match db_result {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::ok(body))),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            let mut envelope = ApiResponse::ok(body);
            envelope.success = false;
            envelope.error = Some("Database unavailable".to_string());
            (StatusCode::SERVICE_UNAVAILABLE, Json(envelope))
        }
    }
}

/// GET /api/info -- static service metadata, no external calls.
async fn info() -> Json<ApiResponse<InfoResponse>> {
    Json(ApiResponse::ok(InfoResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        endpoints: ENDPOINTS,
    }))
}

/// Mount health and info routes (under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/info", get(info))
}
