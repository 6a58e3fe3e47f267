//! In-memory repository implementation.

use std::collections::HashMap;

use herd_core::storage::{validate_entity, CrudRepository, DaoError, Result};
use herd_core::unicorn::Identifiable;

/// In-memory storage backend for testing.
///
/// Entities live in a `HashMap` keyed by identity. Data is not persisted and
/// will be lost when the repository is dropped.
///
/// There is no internal synchronization. Mutating operations need `&mut self`,
/// so sharing one repository between threads requires the caller to wrap it
/// (e.g. in a `Mutex`).
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    entities: HashMap<i32, T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryRepository<T> {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
        }
    }

    /// Creates a repository pre-seeded with the given entities.
    pub fn with_entities(entities: HashMap<i32, T>) -> Self {
        Self { entities }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

}

impl<T> From<HashMap<i32, T>> for InMemoryRepository<T> {
    fn from(entities: HashMap<i32, T>) -> Self {
        Self::with_entities(entities)
    }
}

impl<T: Identifiable> InMemoryRepository<T> {
    /// Next identity: one past the largest stored key, or 1 when empty.
    fn next_id(&self) -> Result<i32> {
        match self.entities.keys().max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| DaoError::CreationFailed {
                entity_type: T::ENTITY_TYPE,
                reason: format!("no identity left after {max}"),
            }),
        }
    }
}

impl<T> CrudRepository<T> for InMemoryRepository<T>
where
    T: Identifiable + Clone,
{
    fn create(&mut self, mut entity: T) -> Result<T> {
        validate_entity(&entity)?;
        let id = match entity.id() {
            Some(id) if self.entities.contains_key(&id) => {
                return Err(DaoError::DuplicateIdentity {
                    entity_type: T::ENTITY_TYPE,
                    id,
                });
            }
            Some(id) => id,
            None => {
                let id = self.next_id()?;
                entity.set_id(id);
                id
            }
        };

        self.entities.insert(id, entity.clone());
        tracing::debug!(entity_type = T::ENTITY_TYPE, id, "Created entity in memory");
        Ok(entity)
    }

    fn get_by_id(&self, id: i32) -> Result<T> {
        self.entities
            .get(&id)
            .cloned()
            .ok_or(DaoError::NotFound {
                entity_type: T::ENTITY_TYPE,
                id,
            })
    }

    fn get_all(&self) -> Result<Vec<T>> {
        Ok(self.entities.values().cloned().collect())
    }

    fn update(&mut self, entity: T) -> Result<T> {
        let Some(id) = entity.id() else {
            return Err(DaoError::InvalidEntity {
                entity_type: T::ENTITY_TYPE,
                reason: "update requires an identity".to_string(),
            });
        };
        validate_entity(&entity)?;

        match self.entities.get_mut(&id) {
            Some(stored) => {
                *stored = entity.clone();
                Ok(entity)
            }
            None => Err(DaoError::NotFound {
                entity_type: T::ENTITY_TYPE,
                id,
            }),
        }
    }

    fn delete(&mut self, entity: &T) -> Result<()> {
        if let Some(id) = entity.id() {
            self.entities.remove(&id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herd_core::unicorn::Unicorn;

    fn sprinkles() -> Unicorn {
        Unicorn::new("Sprinkles", 5, "Pink", 10.0)
    }

    #[test]
    fn test_create_on_empty_assigns_one() {
        let mut repo = InMemoryRepository::new();

        let created = repo.create(sprinkles()).unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_create_assigns_max_plus_one() {
        let mut seeded = HashMap::new();
        seeded.insert(4, sprinkles().with_id(4));
        seeded.insert(2, sprinkles().with_id(2));
        let mut repo = InMemoryRepository::from(seeded);

        let created = repo.create(sprinkles()).unwrap();

        assert_eq!(created.id, Some(5));
    }

    #[test]
    fn test_create_after_max_identity_fails_without_storing() {
        let mut repo = InMemoryRepository::new();
        repo.create(sprinkles().with_id(i32::MAX)).unwrap();

        let result = repo.create(sprinkles());

        assert!(matches!(result, Err(DaoError::CreationFailed { .. })));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_create_rejects_non_finite_power_strength() {
        let mut repo: InMemoryRepository<Unicorn> = InMemoryRepository::new();

        let result = repo.create(Unicorn::new("Sprinkles", 5, "Pink", f64::NAN));

        assert!(matches!(result, Err(DaoError::InvalidEntity { .. })));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_create_keeps_supplied_id() {
        let mut repo = InMemoryRepository::new();

        let created = repo.create(sprinkles().with_id(42)).unwrap();

        assert_eq!(created.id, Some(42));
        assert_eq!(repo.get_by_id(42).unwrap(), created);
    }

    #[test]
    fn test_create_duplicate() {
        let mut repo = InMemoryRepository::new();
        repo.create(sprinkles().with_id(1)).unwrap();

        let result = repo.create(sprinkles().with_id(1));

        assert!(matches!(
            result,
            Err(DaoError::DuplicateIdentity { id: 1, .. })
        ));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_get_nonexistent() {
        let repo: InMemoryRepository<Unicorn> = InMemoryRepository::new();

        let result = repo.get_by_id(999);

        assert!(matches!(result, Err(DaoError::NotFound { id: 999, .. })));
    }

    #[test]
    fn test_get_returns_copy() {
        let mut repo = InMemoryRepository::new();
        let created = repo.create(sprinkles()).unwrap();

        let mut fetched = repo.get_by_id(1).unwrap();
        fetched.age = 99;

        assert_eq!(repo.get_by_id(1).unwrap(), created);
    }

    #[test]
    fn test_update_overwrites() {
        let mut repo = InMemoryRepository::new();
        let mut unicorn = repo.create(sprinkles()).unwrap();

        unicorn.power_strength = 20.0;
        repo.update(unicorn.clone()).unwrap();

        assert_eq!(repo.get_by_id(1).unwrap().power_strength, 20.0);
    }

    #[test]
    fn test_update_nonexistent() {
        let mut repo = InMemoryRepository::new();

        let result = repo.update(sprinkles().with_id(7));

        assert!(matches!(result, Err(DaoError::NotFound { id: 7, .. })));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_update_without_identity() {
        let mut repo = InMemoryRepository::new();

        let result = repo.update(sprinkles());

        assert!(matches!(result, Err(DaoError::InvalidEntity { .. })));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut repo = InMemoryRepository::new();
        let unicorn = repo.create(sprinkles()).unwrap();

        repo.delete(&unicorn).unwrap();
        repo.delete(&unicorn).unwrap();
        repo.delete(&sprinkles()).unwrap();

        assert!(repo.is_empty());
    }
}
