//! Command dispatch and the error-to-message policy.

use super::handlers;
use super::parser::{parse_input, Command};
use crate::app::AppContext;
use crate::error::CommandResult;
use chrono::NaiveDate;
use tracing::debug;

/// What the console loop should do after a line is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading
    Reply(String),
    /// Print the text and end the session
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Reply(text) | Self::Exit(text) => text,
        }
    }
}

/// Turn a handler result into reply text.
///
/// Every `CommandError` becomes its fixed user-facing message.
pub fn recover(result: CommandResult<String>) -> String {
    result.unwrap_or_else(|e| {
        debug!("Command failed: {}", e);
        e.user_message().to_string()
    })
}

/// Parse and execute one console line against the application context.
///
/// `today` anchors the `birthdays` command.
pub fn dispatch(ctx: &mut AppContext, line: &str, today: NaiveDate) -> Outcome {
    let parsed = match parse_input(line) {
        Ok(parsed) => parsed,
        Err(e) => return Outcome::Reply(recover(Err(e))),
    };
    debug!("Dispatching {:?} with {} args", parsed.command, parsed.args.len());

    let args = parsed.args.as_slice();
    let window_days = ctx.birthday_window_days();
    let directory = ctx.directory_mut();

    let result = match parsed.command {
        Command::Exit => return Outcome::Exit("Good bye".to_string()),
        Command::Hello => Ok(handlers::hello()),
        Command::Add => handlers::add_contact(args, directory),
        Command::Change => handlers::change_contact(args, directory),
        Command::All => handlers::show_all(directory),
        Command::Phone => handlers::show_phone(args, directory),
        Command::AddBirthday => handlers::add_birthday(args, directory),
        Command::ShowBirthday => handlers::show_birthday(args, directory),
        Command::Birthdays => handlers::birthdays(directory, today, window_days),
        Command::Delete => handlers::delete_contact(args, directory),
        Command::RemovePhone => handlers::remove_phone(args, directory),
        Command::Unknown(_) => Ok("Invalid command".to_string()),
    };

    Outcome::Reply(recover(result))
}
