//! Command handlers over an address book.
//!
//! Every handler returns a message for the user. Validation and lookup
//! failures become messages too, so no input can end the session.

use super::command::Command;
use crate::book::{AddressBook, SaveReport};
use crate::domain::{FieldKind, Phone, ValidatedField};
use crate::error::{ContactError, ContactResult};
use crate::models::{BirthdayCountdown, Record};
use chrono::{Local, NaiveDate};

/// What the prompt loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and keep reading
    Reply(String),
    /// Print the message and stop
    Quit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Reply(message) | Self::Quit(message) => message,
        }
    }
}

/// Executes commands against an address book.
#[derive(Debug)]
pub struct ContactBot {
    book: AddressBook,
    page_size: usize,
}

impl ContactBot {
    pub fn new(book: AddressBook, page_size: usize) -> Self {
        Self { book, page_size }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run one command against the local date.
    pub fn execute(&mut self, command: Command) -> Outcome {
        self.execute_on(command, Local::now().date_naive())
    }

    /// Run one command, with birthday queries measured from `today`.
    pub fn execute_on(&mut self, command: Command, today: NaiveDate) -> Outcome {
        tracing::debug!("Executing {:?}", command);

        let result = match command {
            Command::Hello => Ok(Self::hello()),
            Command::Add(data) => self.add(&data),
            Command::Change(data) => self.change(&data),
            Command::Phone(name) => self.phone(&name),
            Command::ShowAll => Ok(self.show_all()),
            Command::AddBirthday(data) => self.add_birthday(&data),
            Command::AddEmail(data) => self.add_email(&data),
            Command::SearchByBirthday(days) => Ok(self.search_by_birthday(&days, today)),
            Command::DaysToBirthday(name) => self.days_to_birthday(&name, today),
            Command::Delete(name) => Ok(self.delete(&name)),
            Command::Search(query) => Ok(self.search(&query)),
            Command::Exit => return self.exit(),
            Command::Unknown(_) => Ok("Invalid command. Try again.".to_string()),
        };

        Outcome::Reply(result.unwrap_or_else(|e| Self::describe_error(&e)))
    }

    fn describe_error(error: &ContactError) -> String {
        match error {
            ContactError::InvalidValue(e) => format!("{}. Please try again.", e),
            ContactError::NotFound(what) => format!("Not found: {}", what),
            other => format!("Error: {}", other),
        }
    }

    pub fn hello() -> String {
        "How can I help you?".to_string()
    }

    /// Add a contact with one phone, replacing any contact with the same name.
    pub fn add(&mut self, data: &str) -> ContactResult<String> {
        let Some((name, phone)) = split_pair(data) else {
            return Ok("Invalid data format. Please provide both name and phone.".to_string());
        };

        let mut record = Record::new(name);
        record.add_phone(Phone::new(phone)?);
        self.book.add_record(record);
        Ok(format!("Contact {} added with phone {}", name, phone))
    }

    /// Replace all phones of an existing contact with one new phone.
    pub fn change(&mut self, data: &str) -> ContactResult<String> {
        let Some((name, phone)) = split_pair(data) else {
            return Ok("Invalid data format. Please provide both name and phone.".to_string());
        };

        let phone = Phone::new(phone)?;
        match self.book.find_mut(name) {
            Some(record) => {
                record.clear_phones();
                record.add_phone(phone);
                Ok(format!("Phone number updated for {}", name))
            }
            None => Ok("Contact not found".to_string()),
        }
    }

    pub fn phone(&self, name: &str) -> ContactResult<String> {
        match self.book.find(name) {
            Some(record) if record.phones().is_empty() => Ok(format!("{} has no phones", name)),
            Some(record) => Ok(record.phones().join(", ")),
            None => Ok("Contact not found".to_string()),
        }
    }

    /// Every contact, one per line, with a blank line between pages.
    pub fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts available".to_string();
        }

        self.book
            .iterate(self.page_size)
            .map(|page| {
                page.iter()
                    .map(|record| record.to_string())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn add_birthday(&mut self, data: &str) -> ContactResult<String> {
        let Some((name, birthday)) = split_pair(data) else {
            return Ok("Invalid data format. Please provide both name and birthday.".to_string());
        };
        self.set_field(name, FieldKind::Birthday, birthday)?;
        Ok(format!("Birthday added for {}", name))
    }

    pub fn add_email(&mut self, data: &str) -> ContactResult<String> {
        let Some((name, email)) = split_pair(data) else {
            return Ok("Invalid data format. Please provide both name and email.".to_string());
        };
        self.set_field(name, FieldKind::Email, email)?;
        Ok(format!("Email added for {}", name))
    }

    fn set_field(&mut self, name: &str, kind: FieldKind, value: &str) -> ContactResult<()> {
        let field = ValidatedField::construct(kind, value)?;
        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| ContactError::NotFound(format!("contact with name {}", name)))?;
        record.apply(field)
    }

    /// Names of contacts with a birthday in the next `days` days.
    pub fn search_by_birthday(&self, days: &str, today: NaiveDate) -> String {
        let Ok(days) = days.trim().parse::<i64>() else {
            return format!("Invalid number of days: '{}'", days);
        };

        let names: Vec<&str> = self
            .book
            .upcoming_birthdays(days, today)
            .into_iter()
            .map(|record| record.name().as_str())
            .collect();

        if names.is_empty() {
            format!("No contacts with birthdays in {} days", days)
        } else {
            format!("Contacts with birthdays in {} days: {}", days, names.join(", "))
        }
    }

    pub fn days_to_birthday(&self, name: &str, today: NaiveDate) -> ContactResult<String> {
        let record = self
            .book
            .find(name)
            .ok_or_else(|| ContactError::NotFound(format!("contact with name {}", name)))?;

        Ok(match record.days_to_birthday_from(today) {
            None => format!("No birthday set for {}", name),
            Some(BirthdayCountdown::Today) => format!("Birthday of {} is today!", name),
            Some(BirthdayCountdown::Tomorrow) => format!("Birthday of {} is tomorrow!", name),
            Some(BirthdayCountdown::InDays(days)) => {
                format!("The birthday of {} is {} days away.", name, days)
            }
        })
    }

    pub fn delete(&mut self, name: &str) -> String {
        match self.book.delete(name) {
            Some(_) => format!("Contact {} deleted", name),
            None => format!("Contact {} not found, nothing deleted", name),
        }
    }

    /// Contacts whose name or phone contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> String {
        if query.trim().is_empty() {
            return "Search query cannot be empty".to_string();
        }

        let found = self.book.search(query);
        if found.is_empty() {
            format!("No contacts found matching '{}'", query)
        } else {
            found
                .iter()
                .map(|record| record.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    /// Save the book. A failed save keeps the session open so it can be retried.
    pub fn exit(&mut self) -> Outcome {
        match self.book.save_to_storage() {
            Ok(SaveReport {
                backup: Some(location),
                ..
            }) => Outcome::Quit(format!(
                "The previous contacts file could not be read and was kept at {}.\nGood bye!",
                location
            )),
            Ok(_) => Outcome::Quit("Good bye!".to_string()),
            Err(e) => {
                tracing::error!("Failed to save contacts: {}", e);
                Outcome::Reply(format!("Failed to save contacts: {}", e))
            }
        }
    }
}

/// Split "first second" into exactly two whitespace-separated words.
fn split_pair(data: &str) -> Option<(&str, &str)> {
    let mut words = data.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(first), Some(second), None) => Some((first, second)),
        _ => None,
    }
}
