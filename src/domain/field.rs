//! The closed set of validated contact fields.

use super::birthday::Birthday;
use super::email::Email;
use super::errors::ValidationError;
use super::name::Name;
use super::phone::Phone;
use std::fmt;

/// Which field a raw value is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Birthday,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Birthday => "Birthday",
        };
        write!(f, "{}", label)
    }
}

/// A contact field whose value has passed the validation rule of its kind.
///
/// Every raw value entering a record from the command layer goes through
/// [`ValidatedField::construct`], so an invalid value is never observable.
///
/// # Example
///
/// ```
/// use contact_book::domain::{FieldKind, ValidatedField};
///
/// let mut field = ValidatedField::construct(FieldKind::Phone, "0501234567").unwrap();
/// assert!(field.set("123").is_err());
/// assert_eq!(field.to_string(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedField {
    Name(Name),
    Phone(Phone),
    Email(Email),
    Birthday(Birthday),
}

impl ValidatedField {
    /// Validate `value` against the rule for `kind`.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the matching value object.
    pub fn construct(kind: FieldKind, value: &str) -> Result<Self, ValidationError> {
        Ok(match kind {
            FieldKind::Name => Self::Name(Name::new(value)),
            FieldKind::Phone => Self::Phone(Phone::new(value)?),
            FieldKind::Email => Self::Email(Email::new(value)?),
            FieldKind::Birthday => Self::Birthday(Birthday::parse(Some(value))?),
        })
    }

    /// Replace the held value using the rule of the current kind.
    ///
    /// On error the previous value is kept.
    pub fn set(&mut self, value: &str) -> Result<(), ValidationError> {
        match self {
            Self::Name(name) => {
                name.set(value);
                Ok(())
            }
            Self::Phone(phone) => phone.set(value),
            Self::Email(email) => email.set(value),
            Self::Birthday(birthday) => birthday.set(Some(value)),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name(_) => FieldKind::Name,
            Self::Phone(_) => FieldKind::Phone,
            Self::Email(_) => FieldKind::Email,
            Self::Birthday(_) => FieldKind::Birthday,
        }
    }
}

impl fmt::Display for ValidatedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => fmt::Display::fmt(name, f),
            Self::Phone(phone) => fmt::Display::fmt(phone, f),
            Self::Email(email) => fmt::Display::fmt(email, f),
            Self::Birthday(birthday) => fmt::Display::fmt(birthday, f),
        }
    }
}
