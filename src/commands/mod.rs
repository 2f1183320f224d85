//! Command layer for the interactive assistant.
//!
//! - **parser**: splits input lines into a command word and arguments
//! - **handlers**: executes commands against the address book

pub mod handlers;
pub mod parser;

pub use handlers::{Assistant, Reply};
pub use parser::{parse_input, Command};
