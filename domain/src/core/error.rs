//! Domain error types

use thiserror::Error;

/// Domain-level validation errors.
///
/// These are raised before any external call is attempted and are surfaced
/// to the caller as an `error` tool result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("Argument '{0}' must be a string")]
    NotAString(String),

    #[error("Argument '{0}' must not be empty")]
    EmptyArgument(String),

    #[error("Invalid account_id. Must be {min}-{max} digits")]
    InvalidAccountId { min: usize, max: usize },

    #[error("Invalid account id policy: {0}")]
    InvalidPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_account_id_display() {
        let error = DomainError::InvalidAccountId { min: 5, max: 10 };
        assert_eq!(error.to_string(), "Invalid account_id. Must be 5-10 digits");
    }

    #[test]
    fn test_missing_argument_display() {
        let error = DomainError::MissingArgument("account_id".to_string());
        assert_eq!(error.to_string(), "Missing required argument: account_id");
    }
}
