//! Unified error type for the domain layer
//!
//! Everything the domain rejects is a validation failure; richer failure
//! taxonomies (missing entities, transport faults) belong to the adapters.

use thiserror::Error;

/// Error raised by domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_carries_message() {
        let err = DomainError::validation("name too short");
        assert_eq!(err, DomainError::Validation("name too short".to_string()));
        assert_eq!(err.to_string(), "Validation failed: name too short");
    }
}
