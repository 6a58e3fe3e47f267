//! Pool errors including I/O operations.

use herd_pool_core::PoolConfigError;
use thiserror::Error;

/// Pool errors including I/O operations.
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Config error: {0}")]
    Config(#[from] PoolConfigError),

    #[error("Failed to read property file {path}")]
    PropertyFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Failed to open connections to {target}")]
    Connect {
        target: String,
        #[source]
        source: r2d2::Error,
    },

    #[error("Timed out after {waited_ms}ms waiting for a connection")]
    Timeout {
        waited_ms: u64,
        #[source]
        source: r2d2::Error,
    },

    #[error("Connection pool is closed")]
    Closed,
}

pub type Result<T> = std::result::Result<T, PoolError>;
