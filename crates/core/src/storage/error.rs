use std::error::Error as StdError;

use thiserror::Error;

/// A backend failure carried as the cause of [`DaoError::StorageFailure`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors that can occur during repository operations.
///
/// Every backend reports failures through this type; backend-specific errors
/// are only reachable through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum DaoError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error("{entity_type} already exists: {id}")]
    DuplicateIdentity { entity_type: &'static str, id: i32 },

    #[error("Failed to create {entity_type}: {reason}")]
    CreationFailed {
        entity_type: &'static str,
        reason: String,
    },

    #[error("Invalid {entity_type}: {reason}")]
    InvalidEntity {
        entity_type: &'static str,
        reason: String,
    },

    #[error("Storage failure while {context}")]
    StorageFailure {
        context: String,
        #[source]
        source: BoxError,
    },
}

impl DaoError {
    /// Wraps an underlying failure, keeping it as the error source.
    pub fn storage(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::StorageFailure {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, DaoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = DaoError::NotFound {
            entity_type: "Unicorn",
            id: 999,
        };
        assert_eq!(error.to_string(), "Unicorn not found: 999");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_duplicate_identity_display() {
        let error = DaoError::DuplicateIdentity {
            entity_type: "Unicorn",
            id: 1,
        };
        assert_eq!(error.to_string(), "Unicorn already exists: 1");
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_creation_failed_display() {
        let error = DaoError::CreationFailed {
            entity_type: "Unicorn",
            reason: "no ID obtained".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to create Unicorn: no ID obtained");
    }

    #[test]
    fn test_invalid_entity_display() {
        let error = DaoError::InvalidEntity {
            entity_type: "Unicorn",
            reason: "update requires an identity".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid Unicorn: update requires an identity"
        );
    }

    #[test]
    fn test_storage_failure_keeps_source() {
        let cause = std::io::Error::other("disk on fire");
        let error = DaoError::storage("fetching Unicorn 1", cause);

        assert_eq!(error.to_string(), "Storage failure while fetching Unicorn 1");
        let source = error.source().expect("source is kept");
        assert_eq!(source.to_string(), "disk on fire");
    }
}
