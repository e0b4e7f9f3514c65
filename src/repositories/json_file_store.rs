//! JSON file implementation of RecordStore.

use super::traits::RecordStore;
use crate::error::ContactResult;
use crate::models::StoredRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores all records as one pretty-printed JSON array in a single file.
///
/// Each save rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file name with `.bak` appended.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> ContactResult<Option<Vec<StoredRecord>>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let records = serde_json::from_str(&contents)?;
        Ok(Some(records))
    }

    fn save(&self, records: &[StoredRecord]) -> ContactResult<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        tracing::debug!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    fn backup(&self) -> ContactResult<Option<String>> {
        let target = self.backup_path();
        match fs::copy(&self.path, &target) {
            Ok(bytes) => {
                tracing::debug!("Copied {} bytes to {}", bytes, target.display());
                Ok(Some(target.display().to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactError;

    fn sample() -> StoredRecord {
        StoredRecord {
            name: "Bill".to_string(),
            phones: vec!["0501234567".to_string()],
            email: "None".to_string(),
            birthday: "1985-03-15".to_string(),
        }
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("book.json"));

        store.save(&[sample()]).unwrap();
        assert_eq!(store.load().unwrap(), Some(vec![sample()]));

        store.save(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Some(vec![]));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");

        fs::write(&path, "").unwrap();
        assert!(matches!(
            JsonFileStore::new(&path).load(),
            Err(ContactError::Json(_))
        ));

        fs::write(&path, "{\"name\": \"Bill\"}").unwrap();
        assert!(matches!(
            JsonFileStore::new(&path).load(),
            Err(ContactError::Json(_))
        ));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("no-such-dir").join("book.json"));
        assert!(matches!(store.save(&[sample()]), Err(ContactError::Io(_))));
    }

    #[test]
    fn test_backup_copies_file_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("book.json"));
        assert!(store.backup().unwrap().is_none());

        fs::write(store.path(), "not json at all").unwrap();
        let location = store.backup().unwrap().unwrap();
        assert_eq!(location, store.backup_path().display().to_string());
        assert_eq!(
            fs::read_to_string(store.backup_path()).unwrap(),
            "not json at all"
        );
        assert_eq!(store.backup_path(), dir.path().join("book.json.bak"));
    }

    #[test]
    fn test_location() {
        let store = JsonFileStore::new("contacts.json");
        assert_eq!(store.location(), "contacts.json");
        assert_eq!(store.path(), Path::new("contacts.json"));
    }
}
