//! Data models for the address book.
//!
//! This module contains the contact record that aggregates a name, its phone
//! numbers and an optional birthday.

pub mod record;

pub use record::Record;
