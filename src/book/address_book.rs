//! The address book: an owned, name-keyed collection of records.

use super::birthdays::{
    congratulation_date, format_date, UpcomingBirthday, DEFAULT_WINDOW_DAYS,
};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::fmt;

/// All contacts, keyed by name.
///
/// Keys are always taken from the record's own name, so a record can never
/// be stored under a different key. Iteration follows insertion order; a
/// record replaced through [`AddressBook::add_record`] keeps its slot.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for modification.
    ///
    /// The name itself cannot be changed through the returned reference.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if there is no such record.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Contacts to congratulate in the next 7 days, counted from today's
    /// local date.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_on(Local::now().date_naive())
    }

    /// Contacts to congratulate within 7 days of `today`.
    pub fn upcoming_birthdays_on(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Contacts to congratulate between `today` and `today + window_days`,
    /// both inclusive.
    ///
    /// Results follow insertion order and carry the congratulation date,
    /// which is the birthday moved off a weekend. Records without a birthday,
    /// or with one that cannot be read back as a date, are skipped.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?.date()?;
                let congrats = congratulation_date(birthday, today, window_days)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    birthday: format_date(congrats),
                })
            })
            .collect()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.iter().map(Record::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
