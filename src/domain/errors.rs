//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided date is not a valid `DD.MM.YYYY` date.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(_) => write!(f, "Phone number must contain exactly 10 digits"),
            Self::InvalidDate(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::InvalidDate("2024-02-30".to_string()).to_string(),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            ValidationError::InvalidPhone("123".to_string()).to_string(),
            "Phone number must contain exactly 10 digits"
        );
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Contact name cannot be empty"
        );
    }
}
