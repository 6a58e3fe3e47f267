//! Pure connection pool configuration - no I/O, no threads, no side effects.
//!
//! This crate provides:
//! - Pool parameters with validation
//! - Selection between environment and property-file configuration
//! - Error types for configuration failures
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use herd_pool_core::{ConfigSource, PoolConfig};
//!
//! let env: HashMap<String, String> = [
//!     ("DEPLOYED", "1"),
//!     ("JDBC_USER", "herd"),
//!     ("JDBC_CONNECTION_STRING", "file:{db}.sqlite3"),
//!     ("JDBC_DB", "unicorns"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! assert_eq!(ConfigSource::select(&env), ConfigSource::Environment);
//!
//! let config = PoolConfig::from_environment(&env).unwrap();
//! assert_eq!(config.connection_string(), "file:unicorns.sqlite3");
//! assert_eq!(config.max_size, 10);
//! ```

mod config;
mod error;

pub use config::{
    ConfigSource, Credentials, PoolConfig, StatementCacheConfig, Vars, DATABASE_PLACEHOLDER,
    DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_CACHED_SQL_LEN, DEFAULT_MAX_SIZE,
    DEFAULT_MIN_IDLE, DEFAULT_POOL_NAME, DEFAULT_STATEMENT_CACHE_CAPACITY, DEPLOYMENT_MARKER,
};
pub use error::{PoolConfigError, Result};
