//! Command handlers.
//!
//! Each handler takes the command's positional arguments and the contact
//! directory and returns the reply text. Expected failures come back as
//! [`CommandError`] and are turned into user-facing messages by the
//! dispatcher; "not found" cases that are harmless come back as ordinary
//! notice replies.

use crate::domain::{ContactName, PhoneNumber, BIRTHDAY_FORMAT};
use crate::error::{CommandError, CommandResult};
use crate::models::{ContactDirectory, ContactRecord};
use chrono::NaiveDate;

pub const ADD_USAGE: &str = "Invalid. Please write add+name+phone(10 digits)";
pub const CHANGE_USAGE: &str = "Invalid, format should be: name + old phone number + new number";
pub const ADD_BIRTHDAY_USAGE: &str = "Wrong format.Use name + birthday data";

fn arg<'a>(args: &'a [String], index: usize, what: &'static str) -> CommandResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument(what))
}

fn record_mut<'a>(
    directory: &'a mut ContactDirectory,
    name: &str,
) -> CommandResult<&'a mut ContactRecord> {
    directory
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}

fn record<'a>(directory: &'a ContactDirectory, name: &str) -> CommandResult<&'a ContactRecord> {
    directory
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}

pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// `add <name> <phone>`: create the contact or add a phone to it.
///
/// The phone is validated before anything is created, so a bad number
/// never leaves an empty contact behind.
pub fn add_contact(args: &[String], directory: &mut ContactDirectory) -> CommandResult<String> {
    if args.len() < 2 {
        return Ok(ADD_USAGE.to_string());
    }
    let name = ContactName::new(&args[0])?;
    let phone = PhoneNumber::new(args[1].as_str())?;

    if let Some(existing) = directory.find_mut(name.as_str()) {
        if !existing.add_phone(phone.as_str())? {
            return Ok(format!("{} already exists", phone));
        }
        return Ok("Contact updated".to_string());
    }

    let mut record = ContactRecord::new(name);
    record.add_phone(phone.as_str())?;
    directory.add_record(record);
    Ok("Contact added".to_string())
}

/// `change <name> <old phone> <new phone>`.
pub fn change_contact(args: &[String], directory: &mut ContactDirectory) -> CommandResult<String> {
    if args.len() < 3 {
        return Ok(CHANGE_USAGE.to_string());
    }
    let (name, old, new) = (&args[0], &args[1], &args[2]);

    if record_mut(directory, name)?.edit_phone(old, new)? {
        Ok("Contact updated".to_string())
    } else {
        Ok(format!("{} does not exist", old))
    }
}

/// `all`: every contact, one per line.
pub fn show_all(directory: &ContactDirectory) -> CommandResult<String> {
    if directory.is_empty() {
        return Ok("Contacts list is empty".to_string());
    }
    Ok(directory.to_string())
}

/// `phone <name>`.
pub fn show_phone(args: &[String], directory: &ContactDirectory) -> CommandResult<String> {
    let name = arg(args, 0, "name")?;
    Ok(record(directory, name)?.to_string())
}

/// `add-birthday <name> <DD.MM.YYYY>`.
pub fn add_birthday(args: &[String], directory: &mut ContactDirectory) -> CommandResult<String> {
    if args.len() < 2 {
        return Ok(ADD_BIRTHDAY_USAGE.to_string());
    }
    record_mut(directory, &args[0])?.add_birthday(&args[1])?;
    Ok("Birthday added".to_string())
}

/// `show-birthday <name>`.
pub fn show_birthday(args: &[String], directory: &ContactDirectory) -> CommandResult<String> {
    let name = arg(args, 0, "name")?;
    let record = record(directory, name)?;
    Ok(match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => format!("{} has no birthday set", record.name()),
    })
}

/// `birthdays`: who to congratulate in the coming window.
pub fn birthdays(
    directory: &ContactDirectory,
    today: NaiveDate,
    window_days: i64,
) -> CommandResult<String> {
    let upcoming = directory.upcoming_birthdays_within(today, window_days);
    if upcoming.is_empty() {
        return Ok("There is no birthdays this week".to_string());
    }
    let lines: Vec<String> = upcoming
        .iter()
        .map(|u| {
            format!(
                "Contact name: {}, Greeting date: {}",
                u.name,
                u.date.format(BIRTHDAY_FORMAT)
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

/// `delete <name>`.
pub fn delete_contact(args: &[String], directory: &mut ContactDirectory) -> CommandResult<String> {
    let name = arg(args, 0, "name")?;
    Ok(match directory.delete(name) {
        Some(_) => "Contact deleted".to_string(),
        None => format!("{} does not exist", name),
    })
}

/// `remove-phone <name> <phone>`.
pub fn remove_phone(args: &[String], directory: &mut ContactDirectory) -> CommandResult<String> {
    let name = arg(args, 0, "name")?;
    let phone = arg(args, 1, "phone")?;
    if record_mut(directory, name)?.remove_phone(phone)? {
        Ok("Phone removed".to_string())
    } else {
        Ok(format!("{} does not exist", phone))
    }
}
