//! Bounded pool of reusable SQLite connections.
//!
//! Connections are managed by `r2d2` over `r2d2_sqlite`. Callers block up to
//! the configured acquisition timeout while the pool is exhausted. Topping up
//! to `min_idle` and retiring connections idle past the idle timeout happen
//! on r2d2's worker threads.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use herd_pool_core::{ConfigSource, PoolConfig, Vars};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use serde::Serialize;

use crate::{
    connection::PooledConnection,
    error::{PoolError, Result},
};

/// A handle to a pool of SQLite connections.
///
/// Cloning the handle is cheap; all clones share the same connections and
/// the same closed state.
#[derive(Clone)]
pub struct ConnectionPool {
    shared: Arc<Shared>,
}

struct Shared {
    config: PoolConfig,
    /// `None` once the pool has been closed.
    inner: RwLock<Option<Pool<SqliteConnectionManager>>>,
}

/// Routes r2d2's connection errors into the tracing log.
#[derive(Debug)]
struct LogConnectionErrors {
    pool_name: String,
}

impl r2d2::HandleError<rusqlite::Error> for LogConnectionErrors {
    fn handle_error(&self, error: rusqlite::Error) {
        tracing::warn!(pool = %self.pool_name, error = %error, "Connection error");
    }
}

impl ConnectionPool {
    /// Create a pool and open `min_idle` connections up front.
    ///
    /// Fails if the configuration is invalid or the minimum idle connections
    /// cannot be opened within the acquisition timeout.
    pub fn connect(config: PoolConfig) -> Result<Self> {
        config.validate()?;
        let target = config.connection_string();

        tracing::info!(
            pool = %config.pool_name,
            database = %config.database,
            user = %config.credentials.user,
            max_size = config.max_size,
            min_idle = config.min_idle,
            "Initializing connection pool"
        );

        let busy_timeout = config.acquire_timeout;
        let cache_capacity = config.statement_cache.capacity;
        let manager = SqliteConnectionManager::file(&target).with_init(move |conn| {
            conn.busy_timeout(busy_timeout)?;
            conn.set_prepared_statement_cache_capacity(cache_capacity);
            Ok(())
        });

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(Some(config.min_idle))
            .idle_timeout(Some(config.idle_timeout))
            .connection_timeout(config.acquire_timeout)
            .error_handler(Box::new(LogConnectionErrors {
                pool_name: config.pool_name.clone(),
            }))
            .build(manager)
            .map_err(|source| PoolError::Connect { target, source })?;

        Ok(Self {
            shared: Arc::new(Shared {
                config,
                inner: RwLock::new(Some(pool)),
            }),
        })
    }

    /// Create a pool configured from the process environment.
    ///
    /// When the deployment marker is set, the `JDBC_*` environment variables
    /// are used; otherwise the property file at `properties_path` is read.
    pub fn from_env(properties_path: impl AsRef<Path>) -> Result<Self> {
        let env: Vars = std::env::vars_os()
            .filter_map(|(key, value)| {
                Some((key.into_string().ok()?, value.into_string().ok()?))
            })
            .collect();

        let source = ConfigSource::select(&env);
        let config = match source {
            ConfigSource::Environment => PoolConfig::from_environment(&env)?,
            ConfigSource::PropertyFile => {
                PoolConfig::from_properties(&read_properties(properties_path.as_ref())?)?
            }
        };

        tracing::debug!(%source, "Resolved pool configuration");
        Self::connect(config)
    }

    /// Get a connection, blocking up to the acquisition timeout.
    ///
    /// The connection goes back to the pool when the returned guard is dropped.
    pub fn get(&self) -> Result<PooledConnection> {
        let pool = self.current().ok_or(PoolError::Closed)?;
        let config = &self.shared.config;

        match pool.get() {
            Ok(conn) => Ok(PooledConnection::new(conn, config.statement_cache)),
            Err(source) => {
                let waited_ms = config.acquire_timeout.as_millis() as u64;
                tracing::warn!(
                    pool = %config.pool_name,
                    waited_ms,
                    error = %source,
                    "Timed out waiting for a connection"
                );
                Err(PoolError::Timeout { waited_ms, source })
            }
        }
    }

    /// Close the pool. Safe to call more than once.
    ///
    /// Idle connections are dropped with the pool; checked-out connections are
    /// dropped when returned. Every later `get` fails with [`PoolError::Closed`].
    pub fn close(&self) {
        let pool = self
            .shared
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(pool) = pool {
            let state = pool.state();
            tracing::info!(
                pool = %self.shared.config.pool_name,
                idle = state.idle_connections,
                in_use = state.connections.saturating_sub(state.idle_connections),
                "Shutting down connection pool"
            );
        }
    }

    pub fn is_closed(&self) -> bool {
        self.current().is_none()
    }

    pub fn config(&self) -> &PoolConfig {
        &self.shared.config
    }

    /// Get pool statistics (passive - no I/O).
    pub fn stats(&self) -> PoolStats {
        let max_size = self.shared.config.max_size;
        match self.current() {
            Some(pool) => {
                let state = pool.state();
                PoolStats {
                    max_size,
                    open: state.connections,
                    idle: state.idle_connections,
                    closed: false,
                }
            }
            None => PoolStats {
                max_size,
                open: 0,
                idle: 0,
                closed: true,
            },
        }
    }

    fn current(&self) -> Option<Pool<SqliteConnectionManager>> {
        self.shared
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl std::fmt::Debug for ConnectionPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionPool")
            .field("pool_name", &self.shared.config.pool_name)
            .field("stats", &self.stats())
            .finish()
    }
}

/// Pool statistics (passive data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    pub max_size: u32,
    pub open: u32,
    pub idle: u32,
    pub closed: bool,
}

fn read_properties(path: &Path) -> Result<Vars> {
    let property_err = |source| PoolError::PropertyFile {
        path: path.display().to_string(),
        source,
    };

    dotenvy::from_path_iter(path)
        .map_err(property_err)?
        .collect::<std::result::Result<Vars, _>>()
        .map_err(property_err)
}
