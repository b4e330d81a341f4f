use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let manager = SqliteConnectionManager::file(database_path);
    r2d2::Pool::builder()
        .build(manager)
        .with_context(|| format!("Failed to open database at {}", database_path))
}

/// Single-connection in-memory pool; every connection to `:memory:` is a
/// separate database, so the pool must never open a second one.
pub fn create_memory_pool() -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(1)
        .build(SqliteConnectionManager::memory())
        .context("Failed to create in-memory database")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
