//! Integration tests for the interactive assistant.
//!
//! These tests drive complete sessions through `run_session` with in-memory
//! input and check the exact text a user would see.

mod fixtures;

use address_book::session::WELCOME;
use address_book::{run_session, Assistant};
use chrono::NaiveDate;

const PROMPT: &str = "Enter a command: ";

fn fixed_today() -> NaiveDate {
    fixtures::monday_june_10()
}

async fn run_script(lines: &[&str]) -> Vec<String> {
    let mut assistant = Assistant::with_clock(7, fixed_today);
    let input = lines.join("\n");
    let mut output = Vec::new();

    run_session(&mut assistant, PROMPT, input.as_bytes(), &mut output)
        .await
        .expect("in-memory session cannot fail");

    String::from_utf8(output)
        .unwrap()
        .split(PROMPT)
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_full_session_transcript() {
    let replies = run_script(&[
        "hello",
        "add John 1234567890",
        "add John 5555555555",
        "phone John",
        "change John 1234567890 1112223333",
        "change John 0000000000 1112223333",
        "add-birthday John 15.06.1990",
        "show-birthday John",
        "add-birthday Jane 12.06.1992",
        "birthdays",
        "all",
        "fly",
        "exit",
        "hello",
    ])
    .await;

    assert_eq!(
        replies,
        vec![
            format!("{WELCOME}\n"),
            "How can I help you?\n".to_string(),
            "Contact added.\n".to_string(),
            "Contact updated.\n".to_string(),
            "1234567890; 5555555555\n".to_string(),
            "Phone number changed.\n".to_string(),
            "Phone number not found\n".to_string(),
            "Birthday added.\n".to_string(),
            "15.06.1990\n".to_string(),
            "Birthday added.\n".to_string(),
            "John: 17.06.2024\nJane: 12.06.2024\n".to_string(),
            "Contact name: John, phones: 1112223333; 5555555555\nContact name: Jane, phones: \n"
                .to_string(),
            "Invalid command.\n".to_string(),
            "Good bye!\n".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_errors_do_not_end_session() {
    let replies = run_script(&[
        "add John",
        "add John 12",
        "phone John",
        "add-birthday John 31.02.1990",
        "close",
    ])
    .await;

    assert_eq!(
        &replies[1..],
        &[
            "Not enough arguments. Usage: add <name> <phone>\n",
            "Phone number must contain exactly 10 digits\n",
            "Contact not found.\n",
            "Invalid date format. Use DD.MM.YYYY\n",
            "Good bye!\n",
        ]
    );
}

#[tokio::test]
async fn test_empty_book_messages() {
    let replies = run_script(&["all", "birthdays"]).await;
    assert_eq!(
        &replies[1..],
        &["No contacts.\n", "No upcoming birthdays.\n", ""]
    );
}
