//! Email value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Alphanumeric segments joined by `.`, `-` or `_`, then `@`, a domain label,
/// and one or more alphabetic top-level segments of two letters or more.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9]+[._-])*[A-Za-z0-9]+@[A-Za-z0-9-]+(?:\.[A-Za-z]{2,})+$")
        .expect("Failed to compile email regex")
});

/// A validated email address.
///
/// A record without an email holds `None` rather than an empty `Email`, since
/// the empty string never matches the pattern.
///
/// # Example
///
/// ```
/// use contact_book::domain::Email;
///
/// let email = Email::new("jane.doe@example.com").unwrap();
/// assert_eq!(email.as_str(), "jane.doe@example.com");
/// assert!(Email::new("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the address does not match.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Replace the address, keeping the old one if the new value is invalid.
    pub fn set(&mut self, email: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(email)?;
        Ok(())
    }

    /// Check whether a string is a valid email address.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
