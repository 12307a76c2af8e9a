//! Command dispatcher for the interactive assistant.
//!
//! Lines are tokenized by `parser`, executed by `handlers::Assistant`, and
//! every handler result passes through `input_error` before it is shown.

pub mod handlers;
pub mod parser;

pub use handlers::Assistant;
pub use parser::{parse_input, Command, ParsedInput};

use crate::error::CommandResult;

/// What the session should do after a line has been executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading.
    Message(String),
    /// Print the message and end the session.
    Exit(String),
    /// Nothing to print (blank input).
    Silent,
}

/// Convert a handler result into the text shown to the user.
///
/// Errors become `Error: {message}`; they never end the session.
pub fn input_error(result: CommandResult<String>) -> String {
    match result {
        Ok(message) => message,
        Err(e) => format!("Error: {}", e),
    }
}
