//! Shared fixtures for the integration tests.
//!
//! Builders for records, directories and assistants pinned to a fixed date.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_assistant::{Assistant, ContactDirectory, FixedClock, Record};

/// Build a calendar date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// A record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).expect("valid fixture name");
    for phone in phones {
        record.add_phone(phone).expect("valid fixture phone");
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday).expect("valid fixture birthday");
    }
    record
}

/// A directory holding one birthday-only record per `(name, birthday)` pair,
/// in the order given.
pub fn directory_with_birthdays(entries: &[(&str, &str)]) -> ContactDirectory {
    let mut book = ContactDirectory::new();
    for (name, birthday) in entries {
        book.add_record(sample_record(name, &[], Some(birthday)));
    }
    book
}

/// An assistant whose "today" is 10 June 2024.
pub fn assistant_on_june_tenth() -> Assistant {
    Assistant::new(FixedClock(date(2024, 6, 10)))
}

/// Names of the given records, in order.
pub fn names(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.name().to_string()).collect()
}
