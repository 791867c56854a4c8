//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Errors raised by the user command rules.
///
/// These are expected outcomes of bad input or missing targets, returned as
/// values and surfaced to the HTTP boundary through `AppError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or disallowed input
    #[error("{0}")]
    Validation(String),

    /// Target user does not exist or is inactive
    #[error("User not found")]
    UserNotFound(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error for the given identifier
    pub fn user_not_found(id: impl ToString) -> Self {
        Self::UserNotFound(id.to_string())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("Passwords do not match");

        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn test_not_found_error_hides_id_in_message() {
        let err = DomainError::user_not_found("abc");

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User not found");
        assert_eq!(err, DomainError::UserNotFound("abc".to_string()));
    }
}
