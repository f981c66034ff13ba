//! Command handlers and the error-to-reply boundary.

use crate::model::address_book::AddressBook;
use crate::model::birthday_window::DEFAULT_WINDOW_DAYS;
use crate::model::field::ValidationError;
use crate::model::record::{Record, RecordError};
use chrono::NaiveDate;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

const USAGE_ADD: &str = "add <name> <phone>";
const USAGE_CHANGE: &str = "change <name> <old phone> <new phone>";
const USAGE_PHONE: &str = "phone <name>";
const USAGE_REMOVE_PHONE: &str = "remove-phone <name> <phone>";
const USAGE_DELETE: &str = "delete <name>";
const USAGE_ADD_BIRTHDAY: &str = "add-birthday <name> <DD.MM.YYYY>";
const USAGE_SHOW_BIRTHDAY: &str = "show-birthday <name>";

/// Result of one dispatched command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Print the reply and keep reading commands.
    Reply(String),
    /// Print the farewell, persist the book and stop.
    Exit(String),
}

/// Failure kinds surfaced at the command boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Fewer arguments than the command requires.
    MissingArgument { usage: &'static str },
    ContactNotFound,
    Record(RecordError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument { usage } => write!(f, "Missing argument. Usage: {usage}"),
            Self::ContactNotFound => write!(f, "Contact not found."),
            Self::Record(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Record(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RecordError> for CommandError {
    fn from(value: RecordError) -> Self {
        Self::Record(value)
    }
}

impl From<ValidationError> for CommandError {
    fn from(value: ValidationError) -> Self {
        Self::Record(RecordError::Validation(value))
    }
}

type CommandResult = Result<String, CommandError>;

/// Runs one parsed command against `book`.
///
/// `today` anchors the `birthdays` window. Errors never escape: each is
/// rendered as the reply text.
pub fn execute(
    book: &mut AddressBook,
    today: NaiveDate,
    command: &str,
    args: &[String],
) -> CommandOutcome {
    let result = match command {
        "close" | "exit" => return CommandOutcome::Exit("Good bye!".to_string()),
        "hello" => Ok("How can I help you?".to_string()),
        "add" => add_contact(book, args),
        "change" => change_contact(book, args),
        "phone" => show_phone(book, args),
        "remove-phone" => remove_phone(book, args),
        "delete" => delete_contact(book, args),
        "all" => Ok(show_all(book)),
        "add-birthday" => add_birthday(book, args),
        "show-birthday" => show_birthday(book, args),
        "birthdays" => Ok(birthdays(book, today)),
        _ => {
            debug!("event=command module=command status=unknown");
            return CommandOutcome::Reply("Invalid command.".to_string());
        }
    };

    match result {
        Ok(reply) => {
            debug!("event=command module=command command={command} status=ok");
            CommandOutcome::Reply(reply)
        }
        Err(err) => {
            debug!(
                "event=command module=command command={command} status=error error_kind={}",
                error_kind(&err)
            );
            CommandOutcome::Reply(err.to_string())
        }
    }
}

fn error_kind(err: &CommandError) -> &'static str {
    match err {
        CommandError::MissingArgument { .. } => "missing_argument",
        CommandError::ContactNotFound => "not_found",
        CommandError::Record(RecordError::PhoneNotFound(_)) => "phone_not_found",
        CommandError::Record(RecordError::Validation(_)) => "validation",
    }
}

/// Returns the first `N` arguments, or `MissingArgument` when fewer were given.
/// Extra arguments are ignored.
fn expect_args<'a, const N: usize>(
    args: &'a [String],
    usage: &'static str,
) -> Result<[&'a str; N], CommandError> {
    if args.len() < N {
        return Err(CommandError::MissingArgument { usage });
    }
    Ok(std::array::from_fn(|index| args[index].as_str()))
}

fn existing<'b>(book: &'b mut AddressBook, name: &str) -> Result<&'b mut Record, CommandError> {
    book.find_mut(name).ok_or(CommandError::ContactNotFound)
}

fn add_contact(book: &mut AddressBook, args: &[String]) -> CommandResult {
    let [name, phone] = expect_args(args, USAGE_ADD)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Phone number added.".to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

fn change_contact(book: &mut AddressBook, args: &[String]) -> CommandResult {
    let [name, old_phone, new_phone] = expect_args(args, USAGE_CHANGE)?;
    existing(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

fn show_phone(book: &AddressBook, args: &[String]) -> CommandResult {
    let [name] = expect_args(args, USAGE_PHONE)?;
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    Ok(record
        .phones()
        .iter()
        .map(|phone| phone.as_str())
        .collect::<Vec<_>>()
        .join("; "))
}

fn remove_phone(book: &mut AddressBook, args: &[String]) -> CommandResult {
    let [name, phone] = expect_args(args, USAGE_REMOVE_PHONE)?;
    existing(book, name)?.remove_phone(phone);
    Ok("Phone number removed.".to_string())
}

fn delete_contact(book: &mut AddressBook, args: &[String]) -> CommandResult {
    let [name] = expect_args(args, USAGE_DELETE)?;
    book.delete(name).ok_or(CommandError::ContactNotFound)?;
    Ok("Contact deleted.".to_string())
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts.".to_string();
    }
    book.to_string()
}

fn add_birthday(book: &mut AddressBook, args: &[String]) -> CommandResult {
    let [name, birthday] = expect_args(args, USAGE_ADD_BIRTHDAY)?;
    existing(book, name)?.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

fn show_birthday(book: &AddressBook, args: &[String]) -> CommandResult {
    let [name] = expect_args(args, USAGE_SHOW_BIRTHDAY)?;
    Ok(book
        .find(name)
        .and_then(Record::birthday)
        .map_or_else(|| "Birthday not found.".to_string(), |b| b.to_string()))
}

fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.get_upcoming_birthdays(today, DEFAULT_WINDOW_DAYS);
    if upcoming.is_empty() {
        return "No birthdays.".to_string();
    }
    upcoming
        .iter()
        .map(|item| format!("{}: {}", item.name, item.celebration_date))
        .collect::<Vec<_>>()
        .join("\n")
}
