//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact names, phone numbers
//! and birthdays. Each value object validates at construction time, so an
//! invalid phone or date cannot be represented in the system.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
