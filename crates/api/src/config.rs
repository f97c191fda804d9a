use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use ytauto_db::PoolSettings;

/// Default webhook that starts the video automation workflow.
pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/start-youtube-automation";

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Which origins may call the API from a browser.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Database connection and pool size.
    pub database: PoolSettings,
    /// Webhook that starts the automation workflow.
    pub webhook_url: String,
    /// Timeout for the webhook call; `None` waits indefinitely.
    pub webhook_timeout: Option<Duration>,
    /// Per-request timeout; `None` disables the timeout layer.
    pub request_timeout: Option<Duration>,
    pub cors_origins: CorsOrigins,
    /// Directory holding the HTML pages and Postman files.
    pub public_dir: PathBuf,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                                                   |
    /// |------------------------|-----------------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                                 |
    /// | `PORT`                 | `3000`                                                    |
    /// | `DATABASE_URL`         | unset (overrides the `DB_*` variables when set)           |
    /// | `DB_HOST`              | `localhost`                                               |
    /// | `DB_PORT`              | `5432`                                                    |
    /// | `DB_USER`              | `postgres`                                                |
    /// | `DB_PASSWORD`          | empty                                                     |
    /// | `DB_NAME`              | `youtube_automation`                                      |
    /// | `DB_MAX_CONNECTIONS`   | `10`                                                      |
    /// | `N8N_WEBHOOK_URL`      | `http://localhost:5678/webhook/start-youtube-automation`  |
    /// | `WEBHOOK_TIMEOUT_SECS` | unset                                                     |
    /// | `REQUEST_TIMEOUT_SECS` | unset                                                     |
    /// | `CORS_ORIGINS`         | `*`                                                       |
    /// | `PUBLIC_DIR`           | `public`                                                  |
    /// | `LOG_FORMAT`           | `pretty` (or `json`)                                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = PoolSettings {
            url: lookup("DATABASE_URL").filter(|u| !u.is_empty()),
            host: var_or("DB_HOST", "localhost"),
            port: parse_or(&lookup, "DB_PORT", 5432)?,
            user: var_or("DB_USER", "postgres"),
            password: var_or("DB_PASSWORD", ""),
            database: var_or("DB_NAME", "youtube_automation"),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
        };

        let webhook_timeout =
            parse_optional::<u64, _>(&lookup, "WEBHOOK_TIMEOUT_SECS")?.map(Duration::from_secs);
        let request_timeout =
            parse_optional::<u64, _>(&lookup, "REQUEST_TIMEOUT_SECS")?.map(Duration::from_secs);

        let log_format = match var_or("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    value: other.to_string(),
                    reason: "expected 'pretty' or 'json'".into(),
                })
            }
        };

        Ok(Self {
            host: var_or("HOST", "0.0.0.0"),
            port: parse_or(&lookup, "PORT", 3000)?,
            database,
            webhook_url: var_or("N8N_WEBHOOK_URL", DEFAULT_WEBHOOK_URL),
            webhook_timeout,
            request_timeout,
            cors_origins: parse_cors_origins(&var_or("CORS_ORIGINS", "*"))?,
            public_dir: PathBuf::from(var_or("PUBLIC_DIR", "public")),
            log_format,
        })
    }
}

fn parse_optional<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                var,
                value,
                reason: e.to_string(),
            }),
    }
}

fn parse_or<T, F>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_optional(lookup, var)?.unwrap_or(default))
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|e| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: o.to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
