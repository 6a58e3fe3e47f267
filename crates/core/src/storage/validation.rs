use super::{DaoError, Result};
use crate::unicorn::Identifiable;

/// Runs [`Identifiable::validate`] and reports a rejection as
/// [`DaoError::InvalidEntity`].
pub fn validate_entity<T: Identifiable>(entity: &T) -> Result<()> {
    entity
        .validate()
        .map_err(|reason| DaoError::InvalidEntity {
            entity_type: T::ENTITY_TYPE,
            reason,
        })
}
