use crate::error::ContactResult;
use crate::models::StoredRecord;

/// Storage backend for the address book.
///
/// Provides abstraction over where records are persisted, enabling
/// different implementations (JSON file, in-memory mock).
pub trait RecordStore {
    /// Read every stored record.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> ContactResult<Option<Vec<StoredRecord>>>;

    /// Overwrite the stored records with `records`.
    fn save(&self, records: &[StoredRecord]) -> ContactResult<()>;

    /// Copy whatever is currently stored aside, untouched.
    ///
    /// Returns where the copy went, or `Ok(None)` when nothing is stored.
    fn backup(&self) -> ContactResult<Option<String>>;

    /// Human-readable location, used in log messages.
    fn location(&self) -> String;
}
