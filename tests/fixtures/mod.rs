//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records and dates for building address
//! books in tests.

use address_book::{AddressBook, Record};
use chrono::NaiveDate;

/// Build a calendar date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Monday, 10 June 2024. Used as "today" across the birthday tests.
pub fn monday_june_10() -> NaiveDate {
    date(2024, 6, 10)
}

/// Create a sample record with phones and an optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).expect("valid name");
    for phone in phones {
        record.add_phone(phone).expect("valid phone");
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).expect("valid birthday");
    }
    record
}

/// Create a book holding the given records in order.
#[allow(dead_code)]
pub fn sample_book(records: Vec<Record>) -> AddressBook {
    let mut book = AddressBook::new();
    for record in records {
        book.add_record(record);
    }
    book
}
