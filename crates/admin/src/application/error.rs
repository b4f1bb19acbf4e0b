//! Service-level error type shared by all application services

use thiserror::Error;

use crate::application::dto::FieldError;
use crate::ports::outbound::ApiError;

/// Unified error type for application service operations
#[derive(Debug, Error, Clone)]
pub enum ServiceError {
    /// Backend call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Input failed validation before any network call was attempted
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Backend answered with something the service could not interpret
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ServiceError {
    /// Per-field validation errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
