//! Address Book - an in-memory contact directory with birthday reminders.
//!
//! Contacts have a name, any number of ten-digit phone numbers and an
//! optional birthday. The book can list who to congratulate in the coming
//! week, moving weekend birthdays to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact record
//! - **book**: The address book and upcoming-birthday calculation
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **commands**: Input parsing and command handlers
//! - **session**: The interactive read/execute/print loop

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;

pub use book::{AddressBook, UpcomingBirthday};
pub use commands::{Assistant, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::Record;
pub use session::run_session;
