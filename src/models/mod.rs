//! Data models for the address book.
//!
//! A `Record` aggregates the validated domain values that make up one contact.

pub mod record;

pub use record::Record;
