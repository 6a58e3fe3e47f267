//! Configuration types for the connection pool with validation.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::error::{PoolConfigError, Result};

/// Environment variable whose presence selects environment-based configuration.
pub const DEPLOYMENT_MARKER: &str = "DEPLOYED";

/// Placeholder in the connection string template replaced by the database name.
pub const DATABASE_PLACEHOLDER: &str = "{db}";

pub const DEFAULT_POOL_NAME: &str = "herd-sqlite-pool";
pub const DEFAULT_MAX_SIZE: u32 = 10;
pub const DEFAULT_MIN_IDLE: u32 = 2;
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_STATEMENT_CACHE_CAPACITY: usize = 250;
pub const DEFAULT_MAX_CACHED_SQL_LEN: usize = 2048;

// Deployed environment
const ENV_USER: &str = "JDBC_USER";
const ENV_PASSWORD: &str = "JDBC_PASSWORD";
const ENV_CONNECTION_STRING: &str = "JDBC_CONNECTION_STRING";
const ENV_DATABASE: &str = "JDBC_DB";

// Local property file
const PROP_USER: &str = "DB_USERNAME";
const PROP_PASSWORD: &str = "DB_PASSWORD";
const PROP_URL: &str = "DB_URL";
const PROP_DATABASE: &str = "DB_NAME";

/// A snapshot of key/value pairs (process environment or property file).
pub type Vars = HashMap<String, String>;

/// Where the pool configuration is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Environment,
    PropertyFile,
}

impl ConfigSource {
    /// Selects the configuration source for an environment snapshot.
    ///
    /// The deployment marker only has to be present; its value is ignored.
    pub fn select(env: &Vars) -> Self {
        if env.contains_key(DEPLOYMENT_MARKER) {
            Self::Environment
        } else {
            Self::PropertyFile
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => f.write_str("environment"),
            Self::PropertyFile => f.write_str("property file"),
        }
    }
}

/// Database credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Per-connection prepared statement cache settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementCacheConfig {
    /// Number of statements kept per connection.
    pub capacity: usize,
    /// Longest SQL text (in characters) that is cached.
    pub max_sql_len: usize,
}

impl StatementCacheConfig {
    /// Whether a statement is short enough to go through the cache.
    pub fn is_cacheable(&self, sql: &str) -> bool {
        sql.chars().count() <= self.max_sql_len
    }
}

impl Default for StatementCacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_STATEMENT_CACHE_CAPACITY,
            max_sql_len: DEFAULT_MAX_CACHED_SQL_LEN,
        }
    }
}

/// Configuration for the connection pool (validated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Name used in log output.
    pub pool_name: String,
    pub credentials: Credentials,
    /// Connection string, possibly containing [`DATABASE_PLACEHOLDER`].
    pub url_template: String,
    pub database: String,
    /// Maximum number of open connections.
    pub max_size: u32,
    /// Connections kept open even when idle.
    pub min_idle: u32,
    /// Idle connections older than this are retired (down to `min_idle`).
    pub idle_timeout: Duration,
    /// Longest a caller waits for a connection.
    pub acquire_timeout: Duration,
    pub statement_cache: StatementCacheConfig,
}

impl PoolConfig {
    /// Create a config with the default pool parameters (10 connections,
    /// 2 idle, 30s idle timeout, 30s acquire timeout, 250 cached statements).
    pub fn new(
        credentials: Credentials,
        url_template: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            pool_name: DEFAULT_POOL_NAME.to_string(),
            credentials,
            url_template: url_template.into(),
            database: database.into(),
            max_size: DEFAULT_MAX_SIZE,
            min_idle: DEFAULT_MIN_IDLE,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            statement_cache: StatementCacheConfig::default(),
        }
    }

    /// Read the config from a deployed environment.
    ///
    /// Keys: `JDBC_USER`, `JDBC_PASSWORD`, `JDBC_CONNECTION_STRING`, `JDBC_DB`.
    pub fn from_environment(env: &Vars) -> Result<Self> {
        let origin = ConfigSource::Environment;
        Ok(Self::new(
            Credentials::new(
                require(env, origin, ENV_USER)?,
                optional(env, ENV_PASSWORD),
            ),
            require(env, origin, ENV_CONNECTION_STRING)?,
            require(env, origin, ENV_DATABASE)?,
        ))
    }

    /// Read the config from a parsed property file.
    ///
    /// Keys: `DB_USERNAME`, `DB_PASSWORD`, `DB_URL`, `DB_NAME`.
    pub fn from_properties(properties: &Vars) -> Result<Self> {
        let origin = ConfigSource::PropertyFile;
        Ok(Self::new(
            Credentials::new(
                require(properties, origin, PROP_USER)?,
                optional(properties, PROP_PASSWORD),
            ),
            require(properties, origin, PROP_URL)?,
            require(properties, origin, PROP_DATABASE)?,
        ))
    }

    pub fn with_pool_name(mut self, name: impl Into<String>) -> Self {
        self.pool_name = name.into();
        self
    }

    /// Override the pool size limits.
    pub fn with_limits(mut self, max_size: u32, min_idle: u32) -> Result<Self> {
        self.max_size = max_size;
        self.min_idle = min_idle;
        self.validate()?;
        Ok(self)
    }

    /// Override the idle and acquisition timeouts.
    pub fn with_timeouts(
        mut self,
        idle_timeout: Duration,
        acquire_timeout: Duration,
    ) -> Result<Self> {
        self.idle_timeout = idle_timeout;
        self.acquire_timeout = acquire_timeout;
        self.validate()?;
        Ok(self)
    }

    pub fn with_statement_cache(mut self, statement_cache: StatementCacheConfig) -> Self {
        self.statement_cache = statement_cache;
        self
    }

    /// Check the pool parameters.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(PoolConfigError::InvalidMaxSize);
        }
        if self.min_idle > self.max_size {
            return Err(PoolConfigError::InvalidMinIdle {
                min_idle: self.min_idle,
                max_size: self.max_size,
            });
        }
        if self.idle_timeout.is_zero() {
            return Err(PoolConfigError::InvalidTimeout("Idle"));
        }
        if self.acquire_timeout.is_zero() {
            return Err(PoolConfigError::InvalidTimeout("Acquire"));
        }
        Ok(())
    }

    /// The connection string with the database name substituted in.
    pub fn connection_string(&self) -> String {
        self.url_template.replace(DATABASE_PLACEHOLDER, &self.database)
    }
}

fn require(vars: &Vars, origin: ConfigSource, key: &'static str) -> Result<String> {
    vars.get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(PoolConfigError::MissingKey { origin, key })
}

fn optional(vars: &Vars, key: &str) -> String {
    vars.get(key).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vars {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn deployed_env() -> Vars {
        vars(&[
            ("DEPLOYED", ""),
            ("JDBC_USER", "herd"),
            ("JDBC_PASSWORD", "hunter2"),
            ("JDBC_CONNECTION_STRING", "/var/lib/herd/{db}.db"),
            ("JDBC_DB", "unicorns"),
        ])
    }

    #[test]
    fn test_select_environment_when_marker_present() {
        assert_eq!(ConfigSource::select(&deployed_env()), ConfigSource::Environment);
    }

    #[test]
    fn test_select_property_file_without_marker() {
        let env = vars(&[("JDBC_USER", "herd"), ("HOME", "/root")]);
        assert_eq!(ConfigSource::select(&env), ConfigSource::PropertyFile);
    }

    #[test]
    fn test_from_environment_uses_defaults() {
        let config = PoolConfig::from_environment(&deployed_env()).unwrap();

        assert_eq!(config.credentials, Credentials::new("herd", "hunter2"));
        assert_eq!(config.database, "unicorns");
        assert_eq!(config.max_size, 10);
        assert_eq!(config.min_idle, 2);
        assert_eq!(config.idle_timeout, Duration::from_secs(30));
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
        assert_eq!(config.statement_cache.capacity, 250);
        assert_eq!(config.statement_cache.max_sql_len, 2048);
        assert_eq!(config.pool_name, "herd-sqlite-pool");
    }

    #[test]
    fn test_from_environment_missing_key() {
        let mut env = deployed_env();
        env.remove("JDBC_DB");

        let result = PoolConfig::from_environment(&env);

        assert_eq!(
            result,
            Err(PoolConfigError::MissingKey {
                origin: ConfigSource::Environment,
                key: "JDBC_DB",
            })
        );
    }

    #[test]
    fn test_from_environment_ignores_property_keys() {
        let env = vars(&[
            ("DEPLOYED", "1"),
            ("DB_USERNAME", "herd"),
            ("DB_URL", "{db}.db"),
            ("DB_NAME", "unicorns"),
        ]);

        let err = PoolConfig::from_environment(&env).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Missing configuration key JDBC_USER in environment"
        );
    }

    #[test]
    fn test_from_properties_reads_property_keys() {
        let props = vars(&[
            ("DB_USERNAME", "postgres"),
            ("DB_URL", "file:{db}.sqlite3"),
            ("DB_NAME", "unicorns"),
        ]);

        let config = PoolConfig::from_properties(&props).unwrap();

        assert_eq!(config.credentials.user, "postgres");
        assert_eq!(config.credentials.password, "");
        assert_eq!(config.connection_string(), "file:unicorns.sqlite3");
    }

    #[test]
    fn test_from_properties_blank_value_is_missing() {
        let props = vars(&[("DB_USERNAME", "postgres"), ("DB_URL", "  "), ("DB_NAME", "x")]);

        let err = PoolConfig::from_properties(&props).unwrap_err();

        assert_eq!(err.to_string(), "Missing configuration key DB_URL in property file");
    }

    #[test]
    fn test_connection_string_without_placeholder() {
        let config = PoolConfig::new(Credentials::new("u", ""), "herd.db", "ignored");
        assert_eq!(config.connection_string(), "herd.db");
    }

    #[test]
    fn test_with_limits_rejects_zero_size() {
        let result = PoolConfig::new(Credentials::new("u", ""), "x.db", "x").with_limits(0, 0);
        assert_eq!(result, Err(PoolConfigError::InvalidMaxSize));
    }

    #[test]
    fn test_with_limits_rejects_min_idle_above_max() {
        let result = PoolConfig::new(Credentials::new("u", ""), "x.db", "x").with_limits(2, 3);
        assert!(matches!(
            result,
            Err(PoolConfigError::InvalidMinIdle {
                min_idle: 3,
                max_size: 2
            })
        ));
    }

    #[test]
    fn test_with_timeouts_rejects_zero() {
        let result = PoolConfig::new(Credentials::new("u", ""), "x.db", "x")
            .with_timeouts(Duration::from_secs(1), Duration::ZERO);
        assert_eq!(result, Err(PoolConfigError::InvalidTimeout("Acquire")));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let debug = format!("{:?}", Credentials::new("herd", "hunter2"));
        assert!(debug.contains("herd"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_statement_cache_length_limit() {
        let cache = StatementCacheConfig {
            capacity: 4,
            max_sql_len: 10,
        };
        assert!(cache.is_cacheable("SELECT 1"));
        assert!(!cache.is_cacheable("SELECT 1 FROM unicorns"));
    }
}
