//! Phone value object.

use super::errors::ValidationError;
use std::fmt;

/// Number of digits in a phone number.
pub const PHONE_LENGTH: usize = 10;

/// A validated phone number.
///
/// A phone number is exactly ten ASCII decimal digits, with no formatting
/// characters.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Phone::new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value is not ten digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Replace the number, keeping the old one if the new value is invalid.
    pub fn set(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(phone)?;
        Ok(())
    }

    /// Check whether a string is a valid phone number.
    pub fn is_valid(phone: &str) -> bool {
        phone.chars().count() == PHONE_LENGTH && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
