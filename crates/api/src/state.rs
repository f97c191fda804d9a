use std::sync::Arc;

use ytauto_automation::AutomationClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is the only shared resource; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ytauto_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the automation webhook.
    pub automation: AutomationClient,
}
