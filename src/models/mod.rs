//! Data models for the contact book.
//!
//! This module contains the in-memory contact record and the layout it is
//! persisted in.

pub mod record;
pub mod stored_record;

pub use record::{BirthdayCountdown, Record};
pub use stored_record::StoredRecord;
