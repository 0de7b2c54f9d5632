//! Unified error types for the domain layer
//!
//! Provides a common error type for all domain operations, so callers get
//! consistent error handling without falling back to String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The batch driver was asked for a negative number of draws
    #[error("Invalid draw count: {given} (must be >= 0)")]
    InvalidDrawCount { given: i64 },
}

impl DomainError {
    /// Creates a validation error for value-object invariant violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid draw count error
    pub fn invalid_draw_count(given: i64) -> Self {
        Self::InvalidDrawCount { given }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("outcome must be at least 1");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: outcome must be at least 1"
        );
    }

    #[test]
    fn test_invalid_draw_count_error() {
        let err = DomainError::invalid_draw_count(-3);
        assert!(matches!(err, DomainError::InvalidDrawCount { given: -3 }));
        assert_eq!(err.to_string(), "Invalid draw count: -3 (must be >= 0)");
    }
}
