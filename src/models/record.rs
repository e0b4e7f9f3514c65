//! Record model representing one contact.

use crate::domain::{Birthday, Email, FieldKind, Name, Phone, ValidatedField, ValidationError};
use crate::error::{ContactError, ContactResult};
use chrono::{Local, NaiveDate};
use std::fmt;

/// How far away a contact's next birthday is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayCountdown {
    Today,
    Tomorrow,
    InDays(i64),
}

impl BirthdayCountdown {
    fn from_days(days: i64) -> Self {
        match days {
            0 => Self::Today,
            1 => Self::Tomorrow,
            n => Self::InDays(n),
        }
    }

    /// Number of whole days until the birthday.
    pub fn days(&self) -> i64 {
        match self {
            Self::Today => 0,
            Self::Tomorrow => 1,
            Self::InDays(n) => *n,
        }
    }
}

/// A contact in the address book.
///
/// The name is fixed at construction. Phones are stored as plain strings, but
/// only validated [`Phone`] values can be added.
///
/// ```compile_fail
/// let mut record = contact_book::Record::new("Bill");
/// record.phones.push("not a phone".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,

    /// Phone numbers in insertion order, duplicates allowed
    phones: Vec<String>,

    /// At most one email address
    pub email: Option<Email>,

    /// Birthday, possibly absent
    pub birthday: Birthday,
}

impl Record {
    /// Create a new record with no phones, email or birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            email: None,
            birthday: Birthday::absent(),
        }
    }

    /// Create a record, validating the optional birthday and email.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidValue` if either value fails validation.
    pub fn with_details(
        name: impl Into<String>,
        birthday: Option<&str>,
        email: Option<&str>,
    ) -> ContactResult<Self> {
        let mut record = Self::new(name);
        record.birthday = Birthday::parse(birthday)?;
        record.email = email.map(Email::new).transpose()?;
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    /// Append a phone number.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone.into_inner());
    }

    /// Remove the first occurrence of a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::NotFound` if the record has no such phone.
    pub fn remove_phone(&mut self, phone: &str) -> ContactResult<()> {
        let index = self.phone_index(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first occurrence of `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::NotFound` if the record has no phone `old`.
    pub fn edit_phone(&mut self, old: &str, new: Phone) -> ContactResult<()> {
        let index = self.phone_index(old)?;
        self.phones[index] = new.into_inner();
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|p| p == phone)
    }

    pub fn clear_phones(&mut self) {
        self.phones.clear();
    }

    fn phone_index(&self, phone: &str) -> ContactResult<usize> {
        self.phones.iter().position(|p| p == phone).ok_or_else(|| {
            ContactError::NotFound(format!("phone {} for {}", phone, self.name))
        })
    }

    /// Store a validated field on this record.
    ///
    /// Phones are appended, email and birthday are replaced.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ImmutableField` for a name, which cannot be
    /// reassigned once the record exists.
    pub fn apply(&mut self, field: ValidatedField) -> ContactResult<()> {
        match field {
            ValidatedField::Name(_) => {
                return Err(ValidationError::ImmutableField(FieldKind::Name).into());
            }
            ValidatedField::Phone(phone) => self.add_phone(phone),
            ValidatedField::Email(email) => self.email = Some(email),
            ValidatedField::Birthday(birthday) => self.birthday = birthday,
        }
        Ok(())
    }

    /// Countdown to the next birthday, measured from the local date.
    pub fn days_to_birthday(&self) -> Option<BirthdayCountdown> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Countdown to the next birthday, measured from `today`.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<BirthdayCountdown> {
        self.birthday
            .days_until(today)
            .map(BirthdayCountdown::from_days)
    }

    /// Whether the name or any phone contains `needle`, ignoring case.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.as_str().to_lowercase().contains(needle)
            || self
                .phones
                .iter()
                .any(|phone| phone.to_lowercase().contains(needle))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones.join("; ")
        )?;
        if !self.birthday.is_absent() {
            write!(f, ", Birthday: {}", self.birthday)?;
        }
        Ok(())
    }
}
