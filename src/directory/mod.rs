//! Contact directory: the keyed collection of records and its queries.

mod contact_directory;

pub use contact_directory::{ContactDirectory, RecordMut, DEFAULT_BIRTHDAY_WINDOW_DAYS};
