//! Console commands.
//!
//! - **parser**: Split a console line into a command and arguments
//! - **handlers**: One function per command, operating on the directory
//! - **dispatch**: Route parsed commands and convert errors to messages

pub mod dispatch;
pub mod handlers;
pub mod parser;

pub use dispatch::{dispatch, recover, Outcome};
pub use parser::{parse_input, Command, ParsedInput, EXIT_ALIASES};
