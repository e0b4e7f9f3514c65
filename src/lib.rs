//! Contact Book - a command-line contact manager backed by a JSON file.
//!
//! Contacts have a name, any number of phone numbers, an optional email and an
//! optional birthday. Every field is validated before it is stored, and the
//! whole book is written back to disk on exit.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, email, birthday)
//! - **models**: The contact record and its persisted layout
//! - **repositories**: Storage backends for persisted records
//! - **book**: The address book collection, paging and load/save
//! - **commands**: Command parsing and handlers for the interactive prompt
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use book::{AddressBook, LoadReport, SaveReport};
pub use commands::{Command, ContactBot, Outcome};
pub use config::Config;
pub use domain::{Birthday, Email, FieldKind, Name, Phone, ValidatedField, ValidationError};
pub use error::{ConfigError, ContactError, ContactResult};
pub use models::{BirthdayCountdown, Record, StoredRecord};
pub use repositories::{JsonFileStore, RecordStore};
