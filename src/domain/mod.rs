//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names, phone numbers and birthdays.
//! Each value object validates at construction time, so a value that
//! exists is a value that passed its rules.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
