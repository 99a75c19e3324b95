//! Application context and the interactive console loop.

use crate::commands::{dispatch, Outcome};
use crate::config::Config;
use crate::error::{AppResult, StorageResult};
use crate::models::ContactDirectory;
use crate::repositories::ContactStore;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::info;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Everything a session needs: the loaded book, where to save it, and the
/// birthday look-ahead.
pub struct AppContext {
    directory: ContactDirectory,
    store: Box<dyn ContactStore>,
    birthday_window_days: i64,
}

impl AppContext {
    /// Load the book from `store`.
    pub fn open(store: Box<dyn ContactStore>, config: &Config) -> StorageResult<Self> {
        let directory = store.load()?;
        info!("Contact book opened with {} contacts", directory.len());
        Ok(Self::new(directory, store, config.birthday_window_days))
    }

    pub fn new(
        directory: ContactDirectory,
        store: Box<dyn ContactStore>,
        birthday_window_days: i64,
    ) -> Self {
        Self {
            directory,
            store,
            birthday_window_days,
        }
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut ContactDirectory {
        &mut self.directory
    }

    pub fn birthday_window_days(&self) -> i64 {
        self.birthday_window_days
    }

    /// Save the book and end the session.
    pub fn shutdown(self) -> StorageResult<()> {
        self.store.save(&self.directory)?;
        info!("Contact book saved with {} contacts", self.directory.len());
        Ok(())
    }
}

/// Run the read-dispatch-print loop until an exit command or end of input,
/// then save.
///
/// `today` is asked for the current date each time a line is handled.
pub fn run<R, W, F>(mut ctx: AppContext, input: R, mut output: W, today: F) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "{}", WELCOME)?;
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            info!("End of input, closing session");
            writeln!(output)?;
            break;
        };

        match dispatch(&mut ctx, &line?, today()) {
            Outcome::Reply(text) => writeln!(output, "{}", text)?,
            Outcome::Exit(text) => {
                ctx.shutdown()?;
                writeln!(output, "{}", text)?;
                return Ok(());
            }
        }
    }

    ctx.shutdown()?;
    Ok(())
}
