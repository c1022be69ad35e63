//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope.

use super::entity::EntityId;
use super::validation::ValidationReport;

/// Coarse failure category, used by adapters to pick a response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested id does not exist.
    NotFound,
    /// The submitted entity violates one or more rules.
    Invalid,
    /// Storage or reference data could not be reached or used.
    Infrastructure,
}

/// Outcome of a failed service operation.
///
/// # Examples
/// ```
/// use applicants::domain::{ErrorKind, ServiceError};
///
/// let err = ServiceError::not_found(17);
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.to_string(), "entity 17 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// No entity has the requested id.
    #[error("entity {id} not found")]
    NotFound {
        /// Identifier that was looked up.
        id: EntityId,
    },
    /// Validation failed; the report lists every violated rule.
    #[error("entity failed validation: {0}")]
    Invalid(ValidationReport),
    /// An unexpected fault outside the caller's control.
    #[error("infrastructure failure: {message}")]
    Infrastructure {
        /// Internal detail for logs; never shown to clients.
        message: String,
    },
}

impl ServiceError {
    /// Convenience constructor for [`ServiceError::NotFound`].
    #[must_use]
    pub fn not_found(id: EntityId) -> Self {
        Self::NotFound { id }
    }

    /// Convenience constructor for [`ServiceError::Infrastructure`].
    #[must_use]
    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::Infrastructure {
            message: message.into(),
        }
    }

    /// Failure category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Invalid(_) => ErrorKind::Invalid,
            Self::Infrastructure { .. } => ErrorKind::Infrastructure,
        }
    }
}
