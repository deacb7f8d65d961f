//! PostgreSQL storage for skills, personnel, and projects.
//!
//! Provides the connection pool helpers, embedded migrations, the
//! repository layer, and [`PgStaffingStore`], the storage collaborator
//! consumed by the matching engine.

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod staffing_store;

pub use staffing_store::PgStaffingStore;

pub type DbPool = sqlx::PgPool;

/// Schema migrations embedded from `crates/db/migrations`.
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Number of embedded migrations not yet recorded as applied.
///
/// Fails if the migrations table does not exist yet.
pub async fn pending_migrations(pool: &DbPool) -> Result<usize, sqlx::Error> {
    let applied: Vec<i64> =
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success")
            .fetch_all(pool)
            .await?;
    Ok(MIGRATOR
        .iter()
        .filter(|m| !applied.contains(&m.version))
        .count())
}
