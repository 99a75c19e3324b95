//! Console input parsing.

use crate::error::{CommandError, CommandResult};

/// Keywords that end the session.
pub const EXIT_ALIASES: [&str; 4] = ["exit", "close", "quit", "q"];

/// A recognized command keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    All,
    Phone,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    RemovePhone,
    Exit,
    Unknown(String),
}

impl Command {
    /// Map a case-folded keyword to its command.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "all" => Self::All,
            "phone" => Self::Phone,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "delete" => Self::Delete,
            "remove-phone" => Self::RemovePhone,
            k if EXIT_ALIASES.contains(&k) => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// A command together with its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a console line on whitespace into a command and its arguments.
///
/// The command word is case-folded; arguments are kept as typed.
///
/// # Errors
///
/// Returns `CommandError::InvalidArgument` for a blank line.
pub fn parse_input(line: &str) -> CommandResult<ParsedInput> {
    let mut words = line.split_whitespace();
    let keyword = words
        .next()
        .ok_or_else(|| CommandError::InvalidArgument("empty input".to_string()))?
        .to_lowercase();

    Ok(ParsedInput {
        command: Command::from_keyword(&keyword),
        args: words.map(str::to_string).collect(),
    })
}
