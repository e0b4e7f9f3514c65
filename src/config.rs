//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default backing file, relative to the working directory.
pub const DEFAULT_CONTACTS_FILE: &str = "address_book.json";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file the address book is loaded from and saved to
    pub contacts_file: PathBuf,

    /// Records per page when listing all contacts (default: 10)
    pub page_size: usize,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: Path of the JSON backing file (default: address_book.json)
    /// - `CONTACTS_PAGE_SIZE`: Records per page for `show_all` (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is normal; a malformed one is not.
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let contacts_file =
            env::var("CONTACTS_FILE").unwrap_or_else(|_| DEFAULT_CONTACTS_FILE.to_string());
        if contacts_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let page_size = Self::parse_env_usize("CONTACTS_PAGE_SIZE", 10)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            contacts_file: PathBuf::from(contacts_file),
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            page_size: 10,
            log_level: "warn".to_string(),
        }
    }
}
