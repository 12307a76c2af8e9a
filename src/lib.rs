//! Contact Assistant - an interactive command-line address book.
//!
//! Keeps named contacts with validated phone numbers and optional birthdays
//! in memory for the length of one session, and answers commands to add,
//! change, list and look up upcoming birthdays.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The `Record` entity aggregating one contact's values
//! - **directory**: Insertion-ordered collection of records and the birthday query
//! - **commands**: Line parsing, command handlers and the error boundary
//! - **session**: Async read-print loop over any reader/writer pair
//! - **clock**: Reference date source for date-relative commands
//! - **config**: Configuration from environment variables
//! - **error**: Error types for contact operations, commands and configuration

pub mod clock;
pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{input_error, Assistant, Reply};
pub use config::Config;
pub use directory::{ContactDirectory, RecordMut};
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, ContactError};
pub use models::Record;
pub use session::{run_session, SessionEnd};
