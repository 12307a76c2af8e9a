//! Command handlers for the assistant.
//!
//! Each handler checks its argument count, runs against the directory and
//! returns the text to print. Core errors are returned unchanged; the
//! session turns them into `Error: ...` lines through `input_error`.

use super::parser::{parse_input, Command};
use super::{input_error, Reply};
use crate::clock::Clock;
use crate::directory::{ContactDirectory, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;

const CONTACT_NOT_FOUND: &str = "Contact not found.";

/// The command dispatcher: owns the directory for one session.
pub struct Assistant {
    book: ContactDirectory,
    clock: Box<dyn Clock>,
    birthday_window_days: u32,
}

impl Assistant {
    /// Create an assistant with an empty directory and a seven-day
    /// birthday window.
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            book: ContactDirectory::new(),
            clock: Box::new(clock),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }

    /// Look this many days ahead in `birthdays`.
    pub fn with_birthday_window(mut self, days: u32) -> Self {
        self.birthday_window_days = days;
        self
    }

    pub fn book(&self) -> &ContactDirectory {
        &self.book
    }

    /// Run one line of input.
    pub fn execute(&mut self, line: &str) -> Reply {
        let Some(parsed) = parse_input(line) else {
            return Reply::Silent;
        };
        tracing::debug!(command = ?parsed.command, args = parsed.args.len(), "Dispatching");

        let args = &parsed.args;
        let result = match parsed.command {
            Command::Exit => return Reply::Exit("Good bye!".to_string()),
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add => self.add_contact(args),
            Command::Change => self.change_contact(args),
            Command::Phone => self.show_phone(args),
            Command::All => Ok(self.show_all()),
            Command::AddBirthday => self.add_birthday(args),
            Command::ShowBirthday => self.show_birthday(args),
            Command::Birthdays => Ok(self.birthdays()),
            Command::Unknown(word) => {
                tracing::warn!(command = %word, "Unknown command");
                Ok("Invalid command.".to_string())
            }
        };

        if let Err(ref e) = result {
            tracing::warn!(error = ?e, "Command rejected");
        }
        Reply::Message(input_error(result))
    }

    /// `add <name> <phone>`: append a phone, creating the contact if needed.
    ///
    /// The contact is stored before the phone is checked, so an invalid
    /// phone still leaves a new contact behind with no phones.
    pub fn add_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, phone] = unpack(args)?;

        let name = ContactName::new(name)?;
        self.book.find_or_insert(name).add_phone(phone)?;
        Ok("Contact added.".to_string())
    }

    /// `change <name> <old_phone> <new_phone>`
    pub fn change_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, old_phone, new_phone] = unpack(args)?;

        let Some(mut record) = self.book.find_mut(name) else {
            return Ok(CONTACT_NOT_FOUND.to_string());
        };
        record.edit_phone(old_phone, new_phone)?;
        Ok("Phone number updated.".to_string())
    }

    /// `phone <name>`
    pub fn show_phone(&self, args: &[String]) -> CommandResult<String> {
        let [name] = unpack(args)?;

        Ok(self
            .book
            .find(name)
            .map(Record::describe)
            .unwrap_or_else(|| CONTACT_NOT_FOUND.to_string()))
    }

    /// `all`
    pub fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts found.".to_string();
        }
        join_lines(self.book.iter())
    }

    /// `add-birthday <name> <DD.MM.YYYY>`
    pub fn add_birthday(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, birthday] = unpack(args)?;

        let Some(mut record) = self.book.find_mut(name) else {
            return Ok(CONTACT_NOT_FOUND.to_string());
        };
        record.set_birthday(birthday)?;
        Ok("Birthday added.".to_string())
    }

    /// `show-birthday <name>`
    pub fn show_birthday(&self, args: &[String]) -> CommandResult<String> {
        let [name] = unpack(args)?;

        let Some(record) = self.book.find(name) else {
            return Ok(CONTACT_NOT_FOUND.to_string());
        };
        Ok(match record.birthday() {
            Some(birthday) => format!("{}'s birthday: {}", record.name(), birthday),
            None => "Birthday not set.".to_string(),
        })
    }

    /// `birthdays`
    pub fn birthdays(&self) -> String {
        let today = self.clock.today();
        let upcoming = self
            .book
            .upcoming_birthdays_within(today, self.birthday_window_days);

        if upcoming.is_empty() {
            return format!(
                "No upcoming birthdays in the next {} days.",
                self.birthday_window_days
            );
        }
        join_lines(upcoming)
    }
}

/// Take exactly `N` arguments.
fn unpack<const N: usize>(args: &[String]) -> CommandResult<[&str; N]> {
    if args.len() < N {
        return Err(CommandError::NotEnoughArguments {
            expected: N,
            got: args.len(),
        });
    }
    if args.len() > N {
        return Err(CommandError::TooManyArguments { expected: N });
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

fn join_lines<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    records
        .into_iter()
        .map(Record::describe)
        .collect::<Vec<_>>()
        .join("\n")
}
