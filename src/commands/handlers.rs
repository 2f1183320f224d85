//! Command handlers.
//!
//! Each handler runs one command against the address book and returns the
//! line to show the user. [`Assistant`] dispatches parsed input to them and
//! turns any error into its message.

use super::parser::{parse_input, Command};
use crate::book::AddressBook;
use crate::domain::Phone;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

const ADD_USAGE: &str = "add <name> <phone>";
const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";
const PHONE_USAGE: &str = "phone <name>";
const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";

/// Result of executing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the text and keep reading input
    Continue(String),

    /// Show the text and stop
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

/// Interactive assistant owning the address book for one session.
pub struct Assistant {
    book: AddressBook,
    window_days: u32,
    clock: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl Assistant {
    /// Create an assistant with an empty book.
    ///
    /// `window_days` is how far ahead the `birthdays` command looks.
    pub fn new(window_days: u32) -> Self {
        Self::with_clock(window_days, local_today)
    }

    /// Create an assistant that takes "today" from `clock`.
    pub fn with_clock(window_days: u32, clock: fn() -> NaiveDate) -> Self {
        Self {
            book: AddressBook::new(),
            window_days,
            clock,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parse and execute one input line.
    pub fn execute(&mut self, line: &str) -> Reply {
        let (word, args) = parse_input(line);
        let command = word.parse::<Command>().unwrap_or(Command::Unknown);
        debug!(?command, args = args.len(), "Dispatching command");

        let result = match command {
            Command::Exit => return Reply::Exit("Good bye!".to_string()),
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add => add_contact(&args, &mut self.book),
            Command::Change => change_phone(&args, &mut self.book),
            Command::Phone => show_phones(&args, &self.book),
            Command::All => all_contacts(&self.book),
            Command::AddBirthday => add_birthday(&args, &mut self.book),
            Command::ShowBirthday => show_birthday(&args, &self.book),
            Command::Birthdays => birthdays(&self.book, (self.clock)(), self.window_days),
            Command::Unknown => Ok("Invalid command.".to_string()),
        };

        match result {
            Ok(text) => Reply::Continue(text),
            Err(e) => {
                warn!(?command, error = %e, "Command failed");
                Reply::Continue(e.to_string())
            }
        }
    }
}

fn arg<'a>(args: &'a [String], index: usize, usage: &'static str) -> CommandResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArguments { usage })
}

/// `add <name> <phone>`: create the contact if needed and append the phone.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, ADD_USAGE)?;
    let phone = arg(args, 1, ADD_USAGE)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>`: replace one of the contact's phones.
pub fn change_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, CHANGE_USAGE)?;
    let old = arg(args, 1, CHANGE_USAGE)?;
    let new = arg(args, 2, CHANGE_USAGE)?;

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.edit_phone(old, new)?;
    Ok("Phone number changed.".to_string())
}

/// `phone <name>`: list the contact's phones.
pub fn show_phones(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, PHONE_USAGE)?;
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;

    if record.phones().is_empty() {
        return Ok("No phones.".to_string());
    }
    let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
    Ok(phones.join("; "))
}

/// `all`: every contact, one per line.
pub fn all_contacts(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts.".to_string());
    }
    Ok(book.to_string())
}

/// `add-birthday <name> <date>`: set the birthday, creating the contact if needed.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, ADD_BIRTHDAY_USAGE)?;
    let date = arg(args, 1, ADD_BIRTHDAY_USAGE)?;

    match book.find_mut(name) {
        Some(record) => record.add_birthday(date)?,
        None => {
            let mut record = Record::new(name)?;
            record.add_birthday(date)?;
            book.add_record(record);
        }
    }
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: the contact's stored birthday.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, SHOW_BIRTHDAY_USAGE)?;
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;

    Ok(record
        .birthday()
        .map(|b| b.to_string())
        .unwrap_or_else(|| "Birthday not set.".to_string()))
}

/// `birthdays`: contacts to congratulate within the window.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u32) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays_within(today, window_days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    let lines: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
    Ok(lines.join("\n"))
}
