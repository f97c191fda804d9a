//! HTTP-level tests for `POST /api/start-automation`.
//!
//! The webhook is a throwaway axum server bound to a local ephemeral port.

mod common;

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use common::{body_json, insert_theme, post_json, post_raw, spawn_webhook};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_tema_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/start-automation", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "tema_id is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn zero_or_null_tema_id_returns_400(pool: PgPool) {
    for body in [serde_json::json!({"tema_id": 0}), serde_json::json!({"tema_id": null})] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/start-automation", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_body_returns_400_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/api/start-automation", "application/json", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_theme_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/start-automation",
        serde_json::json!({"tema_id": 424242}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["success"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inactive_theme_returns_404(pool: PgPool) {
    let id = insert_theme(&pool, "Retired", false, 0).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/start-automation", serde_json::json!({"tema_id": id})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn webhook_error_status_returns_500_with_upstream_code(pool: PgPool) {
    let id = insert_theme(&pool, "Science", true, 0).await;
    let webhook = spawn_webhook(Router::new().route(
        "/webhook",
        post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    ))
    .await;

    let app = common::build_app_with_webhook(pool, &webhook);
    let response = post_json(app, "/api/start-automation", serde_json::json!({"tema_id": id})).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(
        json["error"].as_str().unwrap().contains("503"),
        "error should carry the upstream status, got {}",
        json["error"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unreachable_webhook_returns_500(pool: PgPool) {
    let id = insert_theme(&pool, "Science", true, 0).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/start-automation", serde_json::json!({"tema_id": id})).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to start automation"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn successful_trigger_forwards_payload_and_relays_response(pool: PgPool) {
    let id = insert_theme(&pool, "History", true, 0).await;

    let received: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&received);
    let webhook = spawn_webhook(Router::new().route(
        "/webhook",
        post(move |Json(body): Json<serde_json::Value>| {
            let sink = Arc::clone(&sink);
            async move {
                *sink.lock().unwrap() = Some(body);
                Json(serde_json::json!({"executionId": "abc123"}))
            }
        }),
    ))
    .await;

    let app = common::build_app_with_webhook(pool, &webhook);
    let response = post_json(app, "/api/start-automation", serde_json::json!({"tema_id": id})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["message"].is_string());
    assert_eq!(json["data"]["tema"], "History");
    assert_eq!(json["data"]["n8n_response"]["executionId"], "abc123");
    assert!(json["data"]["timestamp"].is_string());

    let payload = received.lock().unwrap().clone().expect("webhook was called");
    assert_eq!(payload["tema_id"], id);
    assert_eq!(payload["tema_nome"], "History");
    assert_eq!(payload["source"], "web_interface");
    assert_eq!(payload["timestamp"], json["data"]["timestamp"]);
}
