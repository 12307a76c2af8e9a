//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{ContactError, ContactResult};
use serde::Serialize;
use std::fmt;

/// Placeholder rendered when a record has no phone numbers.
const NO_PHONES: &str = "No phones";

/// A contact: a name, its phone numbers and an optional birthday.
///
/// The name is fixed at creation because the directory keys records by it.
/// Phones keep insertion order and may repeat.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create an empty record for an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it, even if the record already has it.
    pub fn add_phone(&mut self, phone: &str) -> ContactResult<()> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Missing phones are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`.
    ///
    /// The new value is validated before the search, so an invalid
    /// replacement is reported even when `old_phone` is absent.
    ///
    /// # Errors
    ///
    /// - `ContactError::Validation` if `new_phone` is not ten digits
    /// - `ContactError::PhoneNotFound` if no phone equals `old_phone`
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> ContactResult<()> {
        let replacement = PhoneNumber::new(new_phone)?;

        match self.phones.iter_mut().find(|p| p.as_str() == old_phone) {
            Some(slot) => {
                *slot = replacement;
                Ok(())
            }
            None => Err(ContactError::PhoneNotFound(old_phone.to_string())),
        }
    }

    /// The first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate `birthday` and store it, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: &str) -> ContactResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Render the record as a single line of text.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;

        if self.phones.is_empty() {
            f.write_str(NO_PHONES)?;
        } else {
            for (i, phone) in self.phones.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", phone)?;
            }
        }

        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
