//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and directory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number or date failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record has no phone equal to the given value
    #[error("Phone number not found")]
    PhoneNotFound(String),

    /// The directory has no record under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

/// Errors produced while executing a command from the input loop.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A record or directory operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// The command was given fewer arguments than it needs
    #[error("Not enough arguments. Usage: {usage}")]
    MissingArguments { usage: &'static str },

    /// The named contact does not exist
    #[error("Contact not found.")]
    ContactNotFound,
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

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Phone number not found");

        let err = BookError::ContactNotFound("John".to_string());
        assert_eq!(err.to_string(), "Contact not found: John");

        let err = CommandError::ContactNotFound;
        assert_eq!(err.to_string(), "Contact not found.");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be between 0 and 366".to_string(),
        };
        assert!(err.to_string().contains("ADDRESS_BOOK_BIRTHDAY_WINDOW_DAYS"));
    }

    #[test]
    fn test_validation_error_passes_through() {
        let err: BookError = ValidationError::InvalidDate("x".to_string()).into();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");

        let err: CommandError = err.into();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }

    #[test]
    fn test_missing_arguments_display() {
        let err = CommandError::MissingArguments {
            usage: "phone <name>",
        };
        assert_eq!(
            err.to_string(),
            "Not enough arguments. Usage: phone <name>"
        );
    }
}
