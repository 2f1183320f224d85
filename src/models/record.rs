//! Record model: one contact's name, phones and optional birthday.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at creation. Phones keep their insertion order and may
/// contain duplicates; lookups match the exact stored string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for the given name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if the name is empty.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create an empty record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no stored phone matches; the
    /// list is left unchanged.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let index = self.position_of(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// `new` is validated before anything is changed, so on any error the
    /// phone list is exactly as it was.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self.position_of(old)?;
        let replacement = Phone::new(new)?;
        self.phones[index] = replacement;
        Ok(())
    }

    /// Look up a stored phone by exact value.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one.
    ///
    /// Accepts a `DD.MM.YYYY` string or a `chrono::NaiveDate`.
    pub fn add_birthday<B>(&mut self, birthday: B) -> BookResult<()>
    where
        B: TryInto<Birthday, Error = ValidationError>,
    {
        self.birthday = Some(birthday.try_into()?);
        Ok(())
    }

    fn position_of(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
