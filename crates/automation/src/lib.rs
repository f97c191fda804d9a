//! Client for the external workflow-automation webhook.
//!
//! [`AutomationClient`] POSTs an [`AutomationPayload`] to the configured
//! webhook URL and hands back whatever the workflow engine answered. There
//! are no retries: a failed attempt is reported to the caller at once.

use std::time::Duration;

use serde::Serialize;
use ytauto_core::types::{DbId, Timestamp};

/// Value of the `source` field for triggers coming from this API.
pub const SOURCE_WEB_INTERFACE: &str = "web_interface";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for webhook trigger failures.
#[derive(Debug, thiserror::Error)]
pub enum AutomationError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The webhook answered with a non-2xx status code.
    #[error("Webhook responded with status {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Body posted to the webhook to start a video workflow.
#[derive(Debug, Clone, Serialize)]
pub struct AutomationPayload {
    #[serde(rename = "tema_id")]
    pub theme_id: DbId,
    #[serde(rename = "tema_nome")]
    pub theme_name: String,
    pub timestamp: Timestamp,
    pub source: &'static str,
}

impl AutomationPayload {
    /// Build a payload stamped with the current time.
    pub fn new(theme_id: DbId, theme_name: impl Into<String>) -> Self {
        Self {
            theme_id,
            theme_name: theme_name.into(),
            timestamp: chrono::Utc::now(),
            source: SOURCE_WEB_INTERFACE,
        }
    }
}

// ---------------------------------------------------------------------------
// AutomationClient
// ---------------------------------------------------------------------------

/// Triggers the external automation workflow.
#[derive(Debug, Clone)]
pub struct AutomationClient {
    client: reqwest::Client,
    webhook_url: String,
}

impl AutomationClient {
    /// Create a client for `webhook_url`.
    ///
    /// With `timeout` set to `None` a request waits for the webhook for as
    /// long as the connection stays open.
    pub fn new(
        webhook_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, AutomationError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            webhook_url: webhook_url.into(),
        })
    }

    /// The URL triggers are sent to.
    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// POST the payload and return the webhook's response body.
    ///
    /// JSON bodies are returned as parsed JSON, other non-empty bodies as a
    /// JSON string, and empty bodies as `null`.
    pub async fn trigger(
        &self,
        payload: &AutomationPayload,
    ) -> Result<serde_json::Value, AutomationError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                url = %self.webhook_url,
                status = status.as_u16(),
                theme_id = payload.theme_id,
                "Automation webhook rejected trigger"
            );
            return Err(AutomationError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        tracing::debug!(url = %self.webhook_url, bytes = body.len(), "Automation webhook accepted trigger");
        Ok(parse_body(&body))
    }
}

fn parse_body(body: &str) -> serde_json::Value {
    if body.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
