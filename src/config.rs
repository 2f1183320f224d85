//! Configuration management for the address book assistant.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file in the working directory. Every setting has a default, so an
//! empty environment is a valid configuration.

use crate::book::DEFAULT_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Largest accepted birthday window, in days.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the assistant binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default tracing filter when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// How many days ahead the `birthdays` command looks (default: 7)
    pub birthday_window_days: u32,

    /// Prompt shown before each command (default: "Enter a command: ")
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_LOG_LEVEL`: Logging filter (default: "error")
    /// - `ADDRESS_BOOK_BIRTHDAY_WINDOW_DAYS`: Birthday window, 0-366 (default: 7)
    /// - `ADDRESS_BOOK_PROMPT`: Input prompt (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine; a malformed one is not.
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let defaults = Self::default();

        let birthday_window_days =
            Self::parse_env_u32("ADDRESS_BOOK_BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("ADDRESS_BOOK_LOG_LEVEL").unwrap_or(defaults.log_level);
        let prompt = env::var("ADDRESS_BOOK_PROMPT").unwrap_or(defaults.prompt);

        Ok(Config {
            log_level,
            birthday_window_days,
            prompt,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            prompt: "Enter a command: ".to_string(),
        }
    }
}
