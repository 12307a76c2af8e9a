//! Insertion-ordered collection of contact records.

use crate::domain::ContactName;
use crate::error::ContactResult;
use crate::models::Record;
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::ops::Deref;

/// Default look-ahead of the upcoming-birthday query, in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// All known contacts, keyed by name.
///
/// The map itself stays private: records go in through `add_record` and
/// come out through lookups, so every stored value has passed validation.
/// Iteration follows the order names were first added.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    records: IndexMap<ContactName, Record>,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name.
    ///
    /// An existing record with the same name is replaced, not merged, and
    /// the entry keeps its original position.
    pub fn add_record(&mut self, record: Record) {
        let replaced = self.records.insert(record.name().clone(), record);
        tracing::debug!(replaced = replaced.is_some(), "Record stored");
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact, case-sensitive lookup for in-place edits.
    ///
    /// The handle only reaches phone and birthday mutators, so a stored
    /// record can never be swapped for one with a different name.
    pub fn find_mut(&mut self, name: &str) -> Option<RecordMut<'_>> {
        self.records.get_mut(name).map(|record| RecordMut { record })
    }

    /// The record for `name`, inserting an empty one first if needed.
    pub fn find_or_insert(&mut self, name: ContactName) -> RecordMut<'_> {
        let record = self.records.entry(name).or_insert_with_key(|name| {
            tracing::debug!(name = %name, "Record created");
            Record::with_name(name.clone())
        });
        RecordMut { record }
    }

    /// Remove the record for `name`. Unknown names are ignored.
    pub fn delete(&mut self, name: &str) {
        if self.records.shift_remove(name).is_some() {
            tracing::debug!(name, "Record deleted");
        }
    }

    /// Records whose next birthday is within the default seven-day window.
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<&Record> {
        self.upcoming_birthdays_within(reference, DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }

    /// Records whose next birthday falls between `reference` and
    /// `reference + days`, both ends inclusive.
    ///
    /// Results are in directory order, not date order.
    pub fn upcoming_birthdays_within(&self, reference: NaiveDate, days: u32) -> Vec<&Record> {
        let window = i64::from(days);

        self.records
            .values()
            .filter(|record| {
                record
                    .birthday()
                    .and_then(|birthday| birthday.days_until(reference))
                    .is_some_and(|delta| (0..=window).contains(&delta))
            })
            .collect()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Mutable access to a stored record.
///
/// Reads go through `Deref`; writes are limited to the record's own
/// mutators. There is no `DerefMut`, so the stored record cannot be
/// replaced wholesale:
///
/// ```compile_fail
/// use contact_assistant::{ContactDirectory, Record};
///
/// let mut book = ContactDirectory::new();
/// book.add_record(Record::new("john").unwrap());
/// *book.find_mut("john").unwrap() = Record::new("jane").unwrap();
/// ```
#[derive(Debug)]
pub struct RecordMut<'a> {
    record: &'a mut Record,
}

impl RecordMut<'_> {
    pub fn add_phone(&mut self, phone: &str) -> ContactResult<()> {
        self.record.add_phone(phone)
    }

    pub fn remove_phone(&mut self, phone: &str) {
        self.record.remove_phone(phone)
    }

    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> ContactResult<()> {
        self.record.edit_phone(old_phone, new_phone)
    }

    pub fn set_birthday(&mut self, birthday: &str) -> ContactResult<()> {
        self.record.set_birthday(birthday)
    }
}

impl Deref for RecordMut<'_> {
    type Target = Record;

    fn deref(&self) -> &Record {
        self.record
    }
}
