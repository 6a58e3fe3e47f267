//! SQLite Connection Pool - Imperative Shell.
//!
//! This crate opens and lends out connections using the validated
//! configuration from `herd_pool_core`.
//!
//! # Architecture
//!
//! - **Functional Core** (`herd_pool_core`): Pure config, validation, source selection
//! - **Imperative Shell** (this crate): property files, the `r2d2` pool over `r2d2_sqlite`, blocking waits
//!
//! # Example
//!
//! ```ignore
//! use herd_pool::{ConnectionPool, Credentials, PoolConfig};
//!
//! let config = PoolConfig::new(Credentials::new("herd", ""), "{db}.db", "unicorns");
//!
//! // Opens the minimum idle connections up front
//! let pool = ConnectionPool::connect(config)?;
//!
//! // Blocks up to the acquire timeout; returned to the pool on drop
//! let conn = pool.get()?;
//! let one: i64 = conn.with_statement("SELECT 1", |stmt| stmt.query_row([], |row| row.get(0)))?;
//!
//! pool.close();
//! ```

mod connection;
mod error;
mod pool;

// Re-export core types for convenience
pub use herd_pool_core::{
    ConfigSource, Credentials, PoolConfig, PoolConfigError, StatementCacheConfig,
};

// Export shell types
pub use connection::PooledConnection;
pub use error::{PoolError, Result};
pub use pool::{ConnectionPool, PoolStats};
