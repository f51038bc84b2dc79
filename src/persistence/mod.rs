//! Persistence layer: SQLite-backed storage for activities and signups.
//!
//! [`Database`] owns pool construction and schema bootstrap (embedded
//! migrations run once at startup). [`ActivityStore`] holds every SQL
//! query the service issues.

pub mod activity_store;
pub mod models;

pub use activity_store::ActivityStore;

use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::ApiConfig;
use crate::error::ApiError;

static MEMDB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Database handle with connection pool.
///
/// Created once at startup and shared for the process lifetime. Tests use
/// [`Database::in_memory`] for an isolated store per test.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connection acquire timeout used for in-memory databases.
    const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

    /// Opens the configured database, creating the file and running
    /// migrations if needed.
    ///
    /// `:memory:` and `sqlite::memory:` are routed to [`Database::in_memory`]
    /// so ephemeral runs get a working shared-cache database.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] if the connection string is
    /// invalid, the pool cannot connect, or migrations fail.
    pub async fn connect(config: &ApiConfig) -> Result<Self, ApiError> {
        if matches!(config.database_url.as_str(), ":memory:" | "sqlite::memory:") {
            return Self::in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect_with(options)
            .await?;

        tracing::info!(url = %config.database_url, "database connected");

        Self::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Opens a uniquely named in-memory database with migrations applied.
    ///
    /// Each call gets its own shared-cache memory database. `file::memory:`
    /// is global-ish and would collide across parallel tests.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] if the pool cannot connect or
    /// migrations fail.
    pub async fn in_memory() -> Result<Self, ApiError> {
        let id = MEMDB_COUNTER.fetch_add(1, Ordering::Relaxed);
        let memdb_uri = format!(
            "file:mergington-memdb-{}-{}?mode=memory&cache=shared",
            std::process::id(),
            id
        );

        let options = SqliteConnectOptions::new()
            .filename(&memdb_uri)
            .shared_cache(true)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Self::ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Runs embedded migrations.
    async fn run_migrations(pool: &SqlitePool) -> Result<(), ApiError> {
        sqlx::migrate!("./migrations").run(pool).await?;
        tracing::info!("database migrations checked/applied");
        Ok(())
    }
}
