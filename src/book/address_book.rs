//! The address book: records keyed by name, plus persistence.

use crate::error::ContactResult;
use crate::models::{Record, StoredRecord};
use crate::repositories::{JsonFileStore, RecordStore};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Outcome of reading the backing store.
///
/// Loading never fails the caller; anything other than `Loaded` leaves the
/// book empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    /// Records were read and replaced the book's contents
    Loaded(usize),
    /// Nothing has been stored yet
    Missing,
    /// The store holds an empty list
    Empty,
    /// The store could not be read or a record was invalid
    Failed(String),
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded(count) => write!(f, "Loaded {} contacts.", count),
            Self::Missing => write!(f, "File not found. Creating a new address book."),
            Self::Empty => write!(f, "The contacts file is empty. Starting a new address book."),
            Self::Failed(reason) => write!(
                f,
                "Error loading contacts: {}. Starting with an empty address book.",
                reason
            ),
        }
    }
}

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    /// Number of records written
    pub saved: usize,
    /// Where the unreadable previous contents were copied, if they were
    pub backup: Option<String>,
}

/// Records keyed by contact name, in insertion order.
///
/// Mutations are kept in memory until [`AddressBook::save_to_storage`] is
/// called.
pub struct AddressBook {
    records: HashMap<String, Record>,
    /// Names in insertion order; always the same key set as `records`
    order: Vec<String>,
    store: Box<dyn RecordStore>,
    /// Set when the last load failed; the store is backed up before it is
    /// next overwritten
    preserve_on_save: bool,
}

impl AddressBook {
    /// Open the book backed by a JSON file and load it.
    ///
    /// A missing or unreadable file yields an empty book; the report says why.
    pub fn open(path: impl Into<PathBuf>) -> (Self, LoadReport) {
        Self::with_store(Box::new(JsonFileStore::new(path)))
    }

    /// Create a book on top of any store and load it.
    pub fn with_store(store: Box<dyn RecordStore>) -> (Self, LoadReport) {
        let mut book = Self {
            records: HashMap::new(),
            order: Vec::new(),
            store,
            preserve_on_save: false,
        };
        let report = book.load_from_storage();
        (book, report)
    }

    /// Insert a record under its name, replacing any record with that name.
    ///
    /// A replaced record keeps its position in iteration order.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            tracing::debug!("Replaced contact {}", name);
        } else {
            tracing::debug!("Added contact {}", name);
            self.order.push(name);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record. Removing an unknown name does nothing.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|n| n != name);
        tracing::debug!("Deleted contact {}", name);
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order
            .iter()
            .filter_map(move |name| self.records.get(name))
    }

    /// Pages of up to `page_size` records, in insertion order.
    ///
    /// Each call starts from the first record. A page size of 0 is treated
    /// as 1.
    pub fn iterate(&self, page_size: usize) -> impl Iterator<Item = Vec<&Record>> + '_ {
        self.order.chunks(page_size.max(1)).map(move |names| {
            names
                .iter()
                .filter_map(|name| self.records.get(name))
                .collect()
        })
    }

    /// Records whose name or any phone contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let needle = query.to_lowercase();
        self.records()
            .filter(|record| record.matches_lowercase(&needle))
            .collect()
    }

    /// Records whose next birthday is between 1 and `days` days after `today`.
    pub fn upcoming_birthdays(&self, days: i64, today: NaiveDate) -> Vec<&Record> {
        self.records()
            .filter(|record| {
                record
                    .birthday
                    .days_until(today)
                    .is_some_and(|delta| 0 < delta && delta <= days)
            })
            .collect()
    }

    /// Replace the book's contents with what the store holds.
    ///
    /// Never returns an error: on any failure the book is left empty and the
    /// report explains why. One invalid record fails the whole load, and the
    /// stored data is then backed up by the next save instead of being lost.
    pub fn load_from_storage(&mut self) -> LoadReport {
        self.records.clear();
        self.order.clear();

        let report = match self.store.load() {
            Ok(None) => LoadReport::Missing,
            Ok(Some(stored)) if stored.is_empty() => LoadReport::Empty,
            Ok(Some(stored)) => match Self::restore(stored) {
                Ok(records) => {
                    let count = records.len();
                    for record in records {
                        self.add_record(record);
                    }
                    LoadReport::Loaded(count)
                }
                Err(e) => LoadReport::Failed(e.to_string()),
            },
            Err(e) => LoadReport::Failed(e.to_string()),
        };

        self.preserve_on_save = matches!(report, LoadReport::Failed(_));

        match &report {
            LoadReport::Loaded(count) => {
                tracing::info!("Loaded {} contacts from {}", count, self.store.location())
            }
            other => tracing::warn!("{} ({})", other, self.store.location()),
        }
        report
    }

    fn restore(stored: Vec<StoredRecord>) -> ContactResult<Vec<Record>> {
        stored.into_iter().map(Record::try_from).collect()
    }

    /// Overwrite the store with every record in the book.
    ///
    /// If the last load failed, the store's current contents are backed up
    /// first and the report says where.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Io` or `ContactError::Json` if the backup or
    /// the store cannot be written. Nothing is overwritten when the backup
    /// fails.
    pub fn save_to_storage(&mut self) -> ContactResult<SaveReport> {
        let backup = if self.preserve_on_save {
            let backup = self.store.backup()?;
            self.preserve_on_save = false;
            if let Some(location) = &backup {
                tracing::warn!(
                    "Kept unreadable contacts from {} at {}",
                    self.store.location(),
                    location
                );
            }
            backup
        } else {
            None
        };

        let stored: Vec<StoredRecord> = self.records().map(StoredRecord::from).collect();
        self.store.save(&stored)?;
        tracing::info!(
            "Saved {} contacts to {}",
            stored.len(),
            self.store.location()
        );
        Ok(SaveReport {
            saved: stored.len(),
            backup,
        })
    }
}

impl fmt::Debug for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressBook")
            .field("location", &self.store.location())
            .field("records", &self.order)
            .finish()
    }
}
