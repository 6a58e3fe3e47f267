use super::Result;

/// Create/read/update/delete operations over one entity type.
///
/// Mutating operations take `&mut self`. Backends without internal
/// synchronization rely on this: sharing one across threads requires the
/// caller to serialize access (e.g. behind a `Mutex`).
pub trait CrudRepository<T> {
    /// Persists a new entity and returns it with its identity set.
    ///
    /// An entity without identity gets one generated by the backend. A
    /// caller-supplied identity that already exists fails with
    /// `DuplicateIdentity`. Entities rejected by `Identifiable::validate` fail
    /// with `InvalidEntity`; a generated identity that does not fit an `i32`
    /// fails with `CreationFailed`. A failed create stores nothing.
    fn create(&mut self, entity: T) -> Result<T>;

    /// Gets an entity by its identity. Fails with `NotFound` if absent.
    fn get_by_id(&self, id: i32) -> Result<T>;

    /// Gets every stored entity, in no particular order.
    fn get_all(&self) -> Result<Vec<T>>;

    /// Replaces the stored attributes for the entity's identity.
    ///
    /// Fails with `NotFound` if the identity is not stored and with
    /// `InvalidEntity` if the entity has no identity or fails validation.
    fn update(&mut self, entity: T) -> Result<T>;

    /// Deletes the entity's record. Deleting an absent record is not an error.
    fn delete(&mut self, entity: &T) -> Result<()>;
}

impl<T, R> CrudRepository<T> for Box<R>
where
    R: CrudRepository<T> + ?Sized,
{
    fn create(&mut self, entity: T) -> Result<T> {
        (**self).create(entity)
    }

    fn get_by_id(&self, id: i32) -> Result<T> {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> Result<Vec<T>> {
        (**self).get_all()
    }

    fn update(&mut self, entity: T) -> Result<T> {
        (**self).update(entity)
    }

    fn delete(&mut self, entity: &T) -> Result<()> {
        (**self).delete(entity)
    }
}
