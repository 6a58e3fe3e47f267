//! Scoped connection guard.

use std::ops::Deref;

use herd_pool_core::StatementCacheConfig;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, Statement};

/// A connection checked out of a [`ConnectionPool`](crate::ConnectionPool).
///
/// Derefs to [`rusqlite::Connection`]. The connection goes back to the pool
/// when the guard is dropped, including during unwinding.
pub struct PooledConnection {
    conn: r2d2::PooledConnection<SqliteConnectionManager>,
    statement_cache: StatementCacheConfig,
}

impl PooledConnection {
    pub(crate) fn new(
        conn: r2d2::PooledConnection<SqliteConnectionManager>,
        statement_cache: StatementCacheConfig,
    ) -> Self {
        Self {
            conn,
            statement_cache,
        }
    }

    /// Run `f` with a prepared statement for `sql`.
    ///
    /// Statements up to the configured length go through the connection's
    /// statement cache; longer ones are prepared once and discarded.
    pub fn with_statement<T, F>(&self, sql: &str, f: F) -> rusqlite::Result<T>
    where
        F: FnOnce(&mut Statement<'_>) -> rusqlite::Result<T>,
    {
        if self.statement_cache.is_cacheable(sql) {
            let mut stmt = self.conn.prepare_cached(sql)?;
            f(&mut stmt)
        } else {
            let mut stmt = self.conn.prepare(sql)?;
            f(&mut stmt)
        }
    }
}

impl Deref for PooledConnection {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.conn
    }
}

impl std::fmt::Debug for PooledConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledConnection")
            .field("statement_cache", &self.statement_cache)
            .finish()
    }
}
