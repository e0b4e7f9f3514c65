//! The command API used by the interactive prompt.
//!
//! [`Command::parse`] turns a line of input into a [`Command`], and
//! [`ContactBot`] runs it against the address book.

pub mod bot;
pub mod command;

pub use bot::{ContactBot, Outcome};
pub use command::Command;
