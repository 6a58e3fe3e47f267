//! SQLite error mapping.
//!
//! Maps `rusqlite::Error` and `herd_pool::PoolError` to `DaoError` from `herd_core::storage`.
//! Specific errors are mapped to semantic variants (e.g., PRIMARY KEY constraint to
//! DuplicateIdentity); everything else is wrapped as a storage failure.

use herd_core::storage::DaoError;
use herd_pool::PoolError;

/// Maps a rusqlite error for a known ID to a DaoError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_PRIMARYKEY` / `SQLITE_CONSTRAINT_UNIQUE` → `DaoError::DuplicateIdentity`
/// - `QueryReturnedNoRows` → `DaoError::NotFound`
/// - All other errors → `DaoError::StorageFailure` with the rusqlite error as source
pub fn map_rusqlite_error_with_id(
    err: rusqlite::Error,
    entity_type: &'static str,
    id: i32,
    context: &str,
) -> DaoError {
    match err {
        rusqlite::Error::SqliteFailure(ref sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            DaoError::DuplicateIdentity { entity_type, id }
        }

        rusqlite::Error::QueryReturnedNoRows => DaoError::NotFound { entity_type, id },

        other => map_rusqlite_error(other, context),
    }
}

/// Maps a rusqlite error without a known ID to a DaoError.
pub fn map_rusqlite_error(err: rusqlite::Error, context: &str) -> DaoError {
    tracing::warn!(error = %err, context, "SQLite operation failed");
    DaoError::storage(context, err)
}

/// Maps a failure to acquire a pooled connection to a DaoError.
pub fn map_pool_error(err: PoolError, context: &str) -> DaoError {
    tracing::warn!(error = %err, context, "Could not acquire a connection");
    DaoError::storage(context, err)
}
