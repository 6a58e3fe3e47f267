//! Sample data for demos and tests.

use std::collections::HashMap;

use herd_core::storage::{CrudRepository, Result};
use herd_core::unicorn::Unicorn;
use herd_pool::ConnectionPool;

use crate::storage::SqliteRepository;

/// The two sample unicorns, without identities.
pub fn sample_unicorns() -> [Unicorn; 2] {
    [
        Unicorn::new("Unicorn1", 5, "White", 10.0),
        Unicorn::new("Unicorn2", 7, "Black", 12.0),
    ]
}

/// Sample unicorns keyed by identity 1 and 2, ready for
/// `InMemoryRepository::with_entities`.
pub fn populate_memory() -> HashMap<i32, Unicorn> {
    sample_unicorns()
        .into_iter()
        .zip(1..)
        .map(|(unicorn, id)| (id, unicorn.with_id(id)))
        .collect()
}

/// Replaces the contents of the unicorns table with the sample unicorns.
///
/// Returns the inserted unicorns with their generated identities.
pub fn populate_database(pool: &ConnectionPool) -> Result<Vec<Unicorn>> {
    let mut repo = SqliteRepository::new(pool.clone())?;

    let cleared = repo.delete_all()?;
    let seeded = sample_unicorns()
        .into_iter()
        .map(|unicorn| repo.create(unicorn))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(cleared, seeded = seeded.len(), "Populated database");
    Ok(seeded)
}
