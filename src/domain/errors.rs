//! Domain validation errors.

use super::field::FieldKind;
use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not ten digits.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided birthday is neither "none" nor a `YYYY-MM-DD` date.
    InvalidBirthday(String),

    /// The field cannot be reassigned once a record exists.
    ImmutableField(FieldKind),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {} (expected 10 digits)", phone)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidBirthday(birthday) => {
                write!(f, "Invalid birthday: {} (expected YYYY-MM-DD)", birthday)
            }
            Self::ImmutableField(kind) => write!(f, "{} cannot be changed", kind),
        }
    }
}

impl std::error::Error for ValidationError {}
