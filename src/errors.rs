// Copyright 2025 Cowboy AI, LLC.

//! Error types for domain operations

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Level value outside the INEC ordinal range
    #[error("Invalid INEC level: {value} is not in 0..=5")]
    InvalidLevel {
        /// The rejected raw value
        value: u8,
    },

    /// School not found
    #[error("School not found: INEP code {inep}")]
    SchoolNotFound {
        /// INEP code that was searched for
        inep: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Invariant violation
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Generic domain error
    #[error("Domain error: {0}")]
    Generic(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl DomainError {
    /// Create a generic domain error
    pub fn generic(msg: impl Into<String>) -> Self {
        DomainError::Generic(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            DomainError::ValidationError(_)
                | DomainError::InvariantViolation(_)
                | DomainError::InvalidLevel { .. }
        )
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::SchoolNotFound { .. })
    }
}
