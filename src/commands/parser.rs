//! Tokenizing a line of user input into a command and its arguments.

/// The fixed command vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
    /// Anything else, kept for logging
    Unknown(String),
}

impl Command {
    /// Map a (lower-cased) command word to a command.
    pub fn from_keyword(word: &str) -> Self {
        match word {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// A command word plus the remaining whitespace-separated tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a line into a command and arguments.
///
/// The whole line is lower-cased first, arguments included, so contact
/// names are stored and looked up in lower case. Returns `None` for a
/// blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let line = line.trim().to_lowercase();
    let mut tokens = line.split_whitespace();

    let command = Command::from_keyword(tokens.next()?);
    let args = tokens.map(str::to_string).collect();

    Some(ParsedInput { command, args })
}
