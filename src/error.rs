//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and directory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A phone number or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An edit targeted a phone the record does not have
    #[error("Phone {0} not found")]
    PhoneNotFound(String),
}

/// Errors raised while executing a user command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Fewer arguments than the command takes
    #[error("not enough values to unpack (expected {expected}, got {got})")]
    NotEnoughArguments { expected: usize, got: usize },

    /// More arguments than the command takes
    #[error("too many values to unpack (expected {expected})")]
    TooManyArguments { expected: usize },

    /// The underlying contact operation failed
    #[error(transparent)]
    Contact(#[from] ContactError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Contact(ContactError::Validation(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactError::PhoneNotFound("0501234567".to_string());
        assert_eq!(err.to_string(), "Phone 0501234567 not found");

        let err = ContactError::from(ValidationError::InvalidPhone("1".to_string()));
        assert_eq!(err.to_string(), "Phone number must be a string of 10 digits");

        let err = ConfigError::InvalidValue {
            var: "ASSISTANT_PROMPT".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ASSISTANT_PROMPT: Cannot be empty"
        );

        let err = ConfigError::DotenvError("line 3".to_string());
        assert_eq!(err.to_string(), "Failed to load .env file: line 3");
    }

    #[test]
    fn test_arity_messages() {
        let err = CommandError::NotEnoughArguments {
            expected: 2,
            got: 1,
        };
        assert_eq!(
            err.to_string(),
            "not enough values to unpack (expected 2, got 1)"
        );

        let err = CommandError::TooManyArguments { expected: 1 };
        assert_eq!(err.to_string(), "too many values to unpack (expected 1)");
    }

    #[test]
    fn test_validation_lifts_into_command_error() {
        let err: CommandError = ValidationError::InvalidBirthday("x".to_string()).into();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }
}
