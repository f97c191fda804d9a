pub mod health;
pub mod pages;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /themes                  GET   list active themes
/// /themes/{id}             GET   fetch one active theme
/// /start-automation        POST  trigger the automation webhook
/// /projects                GET   list projects (?status=&limit=)
/// /stats                   GET   aggregate statistics
/// /admin/themes            POST  create a theme
/// /health                  GET   database connectivity probe
/// /info                    GET   static service metadata
/// /postman-collection      GET   Postman collection download
/// /postman-environment     GET   Postman environment download
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/themes", get(handlers::themes::list_themes))
        .route("/themes/{id}", get(handlers::themes::get_theme))
        .route(
            "/start-automation",
            post(handlers::automation::start_automation),
        )
        .route("/projects", get(handlers::projects::list_projects))
        .route("/stats", get(handlers::stats::get_stats))
        .route("/admin/themes", post(handlers::admin::create_theme))
        .route(
            "/postman-collection",
            get(handlers::downloads::postman_collection),
        )
        .route(
            "/postman-environment",
            get(handlers::downloads::postman_environment),
        )
        .merge(health::router())
}
