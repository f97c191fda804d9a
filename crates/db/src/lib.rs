//! Database access for themes, projects, and reporting queries.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Where to connect and how many connections to keep.
///
/// When `url` is set it takes precedence over the discrete fields.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl PoolSettings {
    fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => url.parse(),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.database)),
        }
    }
}

/// Create a bounded connection pool.
///
/// Callers beyond `max_connections` wait for a free connection; connections
/// go back to the pool when each query finishes, whatever its outcome.
pub async fn create_pool(settings: &PoolSettings) -> Result<DbPool, sqlx::Error> {
    let options = settings.connect_options()?;
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to prove the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
