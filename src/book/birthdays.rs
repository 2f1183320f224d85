//! Upcoming birthday calculation.
//!
//! A birthday is celebrated on its next anniversary on or after today. When
//! that anniversary lands on a weekend, congratulations move to the following
//! Monday.

use crate::domain::birthday::DATE_FORMAT;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default length of the upcoming-birthdays window, in days after today.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// One entry of the upcoming-birthdays report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Congratulation date as `DD.MM.YYYY` (after weekend roll-forward)
    pub birthday: String,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.birthday)
    }
}

/// The birthday's month and day in `year`.
///
/// Feb 29 becomes Feb 28 when `year` is not a leap year.
pub fn anniversary_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// The next anniversary of `birthday` that is not before `today`.
pub fn next_anniversary(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birthday, today.year())?;
    if this_year < today {
        anniversary_in(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move a Saturday or Sunday to the following Monday.
pub fn roll_weekend_forward(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

/// The congratulation date for `birthday` if it falls within
/// `today..=today + window_days`.
pub fn congratulation_date(
    birthday: NaiveDate,
    today: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let end_date = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);
    let congrats = roll_weekend_forward(next_anniversary(birthday, today)?)?;

    (today..=end_date).contains(&congrats).then_some(congrats)
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
