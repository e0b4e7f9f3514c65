use contact_book::error::{ContactError, ContactResult};
use contact_book::models::StoredRecord;
use contact_book::repositories::RecordStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock record store for testing.
///
/// Provides an in-memory implementation of RecordStore that can be seeded
/// with stored records, made to fail, and tracks method calls for
/// verification. Clones share state, so a test can keep a handle after
/// giving the store to an address book.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRecordStore {
    records: Arc<Mutex<Option<Vec<StoredRecord>>>>,
    backup: Arc<Mutex<Option<Vec<StoredRecord>>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockRecordStore {
    /// Create a new store that has never been written.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `records`.
    pub fn with_records(records: Vec<StoredRecord>) -> Self {
        let store = Self::new();
        *store.records.lock().unwrap() = Some(records);
        store
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The records most recently saved, if any.
    pub fn saved(&self) -> Option<Vec<StoredRecord>> {
        self.records.lock().unwrap().clone()
    }

    /// The records copied aside by the last backup, if any.
    pub fn backed_up(&self) -> Option<Vec<StoredRecord>> {
        self.backup.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl RecordStore for MockRecordStore {
    fn load(&self) -> ContactResult<Option<Vec<StoredRecord>>> {
        self.track_call("load");
        Ok(self.records.lock().unwrap().clone())
    }

    fn save(&self, records: &[StoredRecord]) -> ContactResult<()> {
        self.track_call("save");
        if *self.fail_saves.lock().unwrap() {
            return Err(ContactError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "mock store is read-only",
            )));
        }
        *self.records.lock().unwrap() = Some(records.to_vec());
        Ok(())
    }

    fn backup(&self) -> ContactResult<Option<String>> {
        self.track_call("backup");
        let current = self.records.lock().unwrap().clone();
        let location = current.as_ref().map(|_| "mock.bak".to_string());
        *self.backup.lock().unwrap() = current;
        Ok(location)
    }

    fn location(&self) -> String {
        "mock".to_string()
    }
}
