//! PostgreSQL persistence for the movie catalog.
//!
//! Exposes the connection pool helpers, the row models and DTOs, and the
//! repositories. Every repository call is bounded by [`QUERY_TIMEOUT`].

use std::future::Future;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;

pub use error::{StoreError, StoreFailure};

pub type DbPool = sqlx::PgPool;

/// Deadline applied to every repository round-trip.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Deadline for the startup connectivity check.
pub const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection pool bounds.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum open connections (default: `25`).
    pub max_connections: u32,
    /// Idle connections are closed after this long (default: 15 minutes).
    pub idle_timeout: Duration,
    /// How long a caller may wait for a free connection (default: 3 seconds).
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 25,
            idle_timeout: Duration::from_secs(15 * 60),
            acquire_timeout: Duration::from_secs(3),
        }
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(config.idle_timeout)
        .acquire_timeout(config.acquire_timeout)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query within [`PING_TIMEOUT`].
pub async fn health_check(pool: &DbPool) -> Result<(), StoreError> {
    bounded(PING_TIMEOUT, sqlx::query("SELECT 1").execute(pool)).await?;
    Ok(())
}

/// Run `fut` under [`QUERY_TIMEOUT`].
pub(crate) async fn with_deadline<T, F>(fut: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    bounded(QUERY_TIMEOUT, fut).await
}

async fn bounded<T, F>(deadline: Duration, fut: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result.map_err(StoreError::from),
        Err(_) => {
            tracing::warn!(deadline_ms = deadline.as_millis() as u64, "Database operation timed out");
            Err(StoreError::Failure(StoreFailure::Timeout(deadline)))
        }
    }
}
