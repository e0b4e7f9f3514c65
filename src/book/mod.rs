//! The keyed collection of contact records and its persistence.

pub mod address_book;

pub use address_book::{AddressBook, LoadReport, SaveReport};
