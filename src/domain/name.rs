//! Name value object.

use std::fmt;

/// A contact name.
///
/// Names are not validated: any string is accepted, including the empty one.
/// The name is the key a record is stored under in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Replace the name.
    pub fn set(&mut self, name: impl Into<String>) {
        self.0 = name.into();
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
