#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use ytauto_api::config::{CorsOrigins, LogFormat, ServerConfig};
use ytauto_api::router::build_app_router;
use ytauto_api::state::AppState;
use ytauto_automation::AutomationClient;
use ytauto_db::PoolSettings;

/// Webhook URL nobody listens on; handlers that reach it fail fast.
pub const UNREACHABLE_WEBHOOK: &str = "http://127.0.0.1:9/webhook";

/// The repository's `public/` directory.
pub fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../public")
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(webhook_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: PoolSettings {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            database: "ytauto_test".to_string(),
            max_connections: 5,
        },
        webhook_url: webhook_url.to_string(),
        webhook_timeout: None,
        request_timeout: None,
        cors_origins: CorsOrigins::Any,
        public_dir: public_dir(),
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router, with the same middleware stack as
/// production, using the given pool and webhook URL.
pub fn build_app_with_webhook(pool: PgPool, webhook_url: &str) -> Router {
    build_app_with_config(pool, test_config(webhook_url))
}

pub fn build_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let automation = AutomationClient::new(config.webhook_url.clone(), config.webhook_timeout)
        .expect("test HTTP client");
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        automation,
    };
    build_app_router(state, &config)
}

/// Build the app with a webhook that cannot be reached.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_webhook(pool, UNREACHABLE_WEBHOOK)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn insert_theme(pool: &PgPool, name: &str, active: bool, display_order: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO themes (name, color_hex, is_active, display_order) \
         VALUES ($1, '#ff6b35', $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(active)
    .bind(display_order)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_project(pool: &PgPool, theme_id: Option<i64>, status: &str, days_ago: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO projects (theme_id, status, created_at) \
         VALUES ($1, $2, now() - make_interval(days => $3)) RETURNING id",
    )
    .bind(theme_id)
    .bind(status)
    .bind(days_ago)
    .fetch_one(pool)
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Fake webhook
// ---------------------------------------------------------------------------

/// Serve `router` on an ephemeral local port; returns the `/webhook` URL.
pub async fn spawn_webhook(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/webhook")
}
