//! Domain value objects and types.
//!
//! This module contains the validated contact fields: names, phone numbers,
//! email addresses and birthdays. Each value object checks its rule at
//! construction and on every mutation, so invalid data cannot be represented.

pub mod birthday;
pub mod email;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use email::Email;
pub use errors::ValidationError;
pub use field::{FieldKind, ValidatedField};
pub use name::Name;
pub use phone::Phone;
