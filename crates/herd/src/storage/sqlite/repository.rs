//! SQLite repository implementation.
//!
//! Implements `CrudRepository<Unicorn>` from `herd_core::storage` on top of a
//! `herd_pool::ConnectionPool`. Every operation checks out one connection and
//! returns it before the call ends.

use herd_core::storage::{validate_entity, CrudRepository, DaoError, Result};
use herd_core::unicorn::{Identifiable, Unicorn};
use herd_pool::{ConnectionPool, PooledConnection};
use rusqlite::{params, OptionalExtension};

use super::conversions::row_to_unicorn;
use super::error::{map_pool_error, map_rusqlite_error, map_rusqlite_error_with_id};
use super::schema;

const ENTITY: &str = Unicorn::ENTITY_TYPE;

/// SQLite-based repository implementation.
///
/// Cheap to clone: clones share the same pool.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: ConnectionPool,
}

impl SqliteRepository {
    /// Creates a repository on the given pool.
    ///
    /// The unicorns table is created if it doesn't exist.
    pub fn new(pool: ConnectionPool) -> Result<Self> {
        let repo = Self { pool };
        repo.init_schema()?;
        Ok(repo)
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Removes every unicorn. Returns the number of deleted rows.
    pub fn delete_all(&self) -> Result<usize> {
        let context = "deleting all Unicorns";
        let conn = self.connection(context)?;

        conn.execute(schema::DELETE_ALL_UNICORNS, [])
            .map_err(|e| map_rusqlite_error(e, context))
    }

    /// Initialize the database schema.
    fn init_schema(&self) -> Result<()> {
        let context = "initializing schema";
        let conn = self.connection(context)?;

        conn.execute_batch(schema::CREATE_TABLES)
            .map_err(|e| map_rusqlite_error(e, context))
    }

    fn connection(&self, context: &str) -> Result<PooledConnection> {
        self.pool.get().map_err(|e| map_pool_error(e, context))
    }
}

impl CrudRepository<Unicorn> for SqliteRepository {
    fn create(&mut self, mut unicorn: Unicorn) -> Result<Unicorn> {
        let context = "creating Unicorn";
        validate_entity(&unicorn)?;
        let conn = self.connection(context)?;

        // Rolled back on drop unless the generated identity fits an i32.
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| map_rusqlite_error(e, context))?;

        let generated: Option<i64> = match unicorn.id() {
            None => conn
                .with_statement(schema::INSERT_UNICORN, |stmt| {
                    stmt.query_row(
                        params![
                            unicorn.name,
                            unicorn.age,
                            unicorn.color,
                            unicorn.power_strength
                        ],
                        |row| row.get(0),
                    )
                    .optional()
                })
                .map_err(|e| map_rusqlite_error(e, context))?,
            Some(id) => conn
                .with_statement(schema::INSERT_UNICORN_WITH_ID, |stmt| {
                    stmt.query_row(
                        params![
                            id,
                            unicorn.name,
                            unicorn.age,
                            unicorn.color,
                            unicorn.power_strength
                        ],
                        |row| row.get(0),
                    )
                    .optional()
                })
                .map_err(|e| map_rusqlite_error_with_id(e, ENTITY, id, context))?,
        };

        let generated = generated.ok_or_else(|| DaoError::CreationFailed {
            entity_type: ENTITY,
            reason: "no ID obtained".to_string(),
        })?;
        let id = i32::try_from(generated).map_err(|_| DaoError::CreationFailed {
            entity_type: ENTITY,
            reason: format!("generated identity {generated} is out of range"),
        })?;
        tx.commit().map_err(|e| map_rusqlite_error(e, context))?;
        unicorn.set_id(id);

        tracing::debug!(id, "Created unicorn");
        Ok(unicorn)
    }

    fn get_by_id(&self, id: i32) -> Result<Unicorn> {
        let context = "fetching Unicorn by ID";
        let conn = self.connection(context)?;

        conn.with_statement(schema::SELECT_UNICORN_BY_ID, |stmt| {
            stmt.query_row([id], row_to_unicorn)
        })
        .map_err(|e| map_rusqlite_error_with_id(e, ENTITY, id, context))
    }

    fn get_all(&self) -> Result<Vec<Unicorn>> {
        let context = "fetching all Unicorns";
        let conn = self.connection(context)?;

        conn.with_statement(schema::SELECT_ALL_UNICORNS, |stmt| {
            stmt.query_map([], row_to_unicorn)?.collect()
        })
        .map_err(|e| map_rusqlite_error(e, context))
    }

    fn update(&mut self, unicorn: Unicorn) -> Result<Unicorn> {
        let context = "updating Unicorn";
        let Some(id) = unicorn.id() else {
            return Err(DaoError::InvalidEntity {
                entity_type: ENTITY,
                reason: "update requires an identity".to_string(),
            });
        };
        validate_entity(&unicorn)?;
        let conn = self.connection(context)?;

        let rows = conn
            .with_statement(schema::UPDATE_UNICORN, |stmt| {
                stmt.execute(params![
                    id,
                    unicorn.name,
                    unicorn.age,
                    unicorn.color,
                    unicorn.power_strength
                ])
            })
            .map_err(|e| map_rusqlite_error_with_id(e, ENTITY, id, context))?;

        if rows == 0 {
            return Err(DaoError::NotFound {
                entity_type: ENTITY,
                id,
            });
        }

        tracing::debug!(id, "Updated unicorn");
        Ok(unicorn)
    }

    fn delete(&mut self, unicorn: &Unicorn) -> Result<()> {
        let context = "deleting Unicorn";
        let Some(id) = unicorn.id() else {
            return Ok(());
        };
        let conn = self.connection(context)?;

        let rows = conn
            .with_statement(schema::DELETE_UNICORN, |stmt| stmt.execute([id]))
            .map_err(|e| map_rusqlite_error_with_id(e, ENTITY, id, context))?;

        tracing::debug!(id, deleted = rows, "Deleted unicorn");
        Ok(())
    }
}
