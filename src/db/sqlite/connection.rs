//! SQLite database connection and schema management.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::project::SqliteProjectRepository;
use crate::db::{Database, DbError, DbResult};

/// SQLite database implementation.
///
/// Holds the connection pool; individual operations acquire a connection
/// from it for their duration. Concurrency control is whatever SQLite's own
/// locking provides, there is no application-level coordination on top.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open a database at the given path, creating the file if absent.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Each SQLite `:memory:` connection gets its own private database, so
    /// the pool is pinned to a single connection that never expires.
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::new().in_memory(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    /// Access the underlying pool.
    ///
    /// This is useful for testing and advanced operations that need
    /// direct database access.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type Projects<'a>
        = SqliteProjectRepository<'a>
    where
        Self: 'a;

    async fn init_schema(&self) -> DbResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                Title TEXT NOT NULL,
                Description TEXT NOT NULL,
                ImageFileName TEXT NOT NULL,
                CreatedAt TEXT DEFAULT CURRENT_TIMESTAMP
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::Schema {
            message: e.to_string(),
        })?;
        Ok(())
    }

    fn projects(&self) -> SqliteProjectRepository<'_> {
        SqliteProjectRepository { pool: &self.pool }
    }
}
