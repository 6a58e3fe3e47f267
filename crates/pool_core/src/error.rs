//! Core pool configuration errors (pure - no I/O variants).

use thiserror::Error;

use crate::config::ConfigSource;

/// Core pool configuration errors (pure - no I/O variants).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolConfigError {
    #[error("Missing configuration key {key} in {origin}")]
    MissingKey { origin: ConfigSource, key: &'static str },

    #[error("Pool size must be at least 1")]
    InvalidMaxSize,

    #[error("Minimum idle connections ({min_idle}) exceeds pool size ({max_size})")]
    InvalidMinIdle { min_idle: u32, max_size: u32 },

    #[error("{0} timeout must be positive")]
    InvalidTimeout(&'static str),
}

pub type Result<T> = std::result::Result<T, PoolConfigError>;
