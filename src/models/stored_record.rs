//! On-disk layout of a record.

use super::record::Record;
use crate::domain::{Birthday, Email, Phone};
use crate::error::ContactError;
use serde::{Deserialize, Serialize};

/// Placeholder written for a missing email or birthday.
pub const ABSENT_MARKER: &str = "None";

/// One element of the persisted JSON array.
///
/// Every field is required; a missing one fails deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredRecord {
    pub name: String,
    pub phones: Vec<String>,
    /// Email address or `"None"`
    pub email: String,
    /// `YYYY-MM-DD` or `"None"`
    pub birthday: String,
}

impl From<&Record> for StoredRecord {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            phones: record.phones().to_vec(),
            email: record
                .email
                .as_ref()
                .map(|email| email.as_str().to_string())
                .unwrap_or_else(|| ABSENT_MARKER.to_string()),
            birthday: record.birthday.to_string(),
        }
    }
}

/// Rebuild a record, validating every stored value again.
impl TryFrom<StoredRecord> for Record {
    type Error = ContactError;

    fn try_from(stored: StoredRecord) -> Result<Self, Self::Error> {
        let mut record = Record::new(stored.name);
        for phone in stored.phones {
            record.add_phone(Phone::new(phone)?);
        }
        if stored.email != ABSENT_MARKER {
            record.email = Some(Email::new(stored.email)?);
        }
        record.birthday = Birthday::parse(Some(stored.birthday.as_str()))?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_record_from_bare_record() {
        let record = Record::new("Bill");
        let stored = StoredRecord::from(&record);
        assert_eq!(stored.name, "Bill");
        assert!(stored.phones.is_empty());
        assert_eq!(stored.email, "None");
        assert_eq!(stored.birthday, "None");
    }

    #[test]
    fn test_stored_record_json_layout() {
        let mut record =
            Record::with_details("Jill", Some("1990-07-04"), Some("jill@example.com")).unwrap();
        record.add_phone(Phone::new("0501234567").unwrap());

        let json = serde_json::to_value(StoredRecord::from(&record)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jill",
                "phones": ["0501234567"],
                "email": "jill@example.com",
                "birthday": "1990-07-04"
            })
        );
    }

    #[test]
    fn test_try_from_restores_record() {
        let stored = StoredRecord {
            name: "Jill".to_string(),
            phones: vec!["0501234567".to_string(), "0679876543".to_string()],
            email: "jill@example.com".to_string(),
            birthday: "1990-07-04".to_string(),
        };
        let record = Record::try_from(stored.clone()).unwrap();
        assert_eq!(record.phones().len(), 2);
        assert_eq!(StoredRecord::from(&record), stored);
    }

    #[test]
    fn test_try_from_rejects_invalid_values() {
        let valid = StoredRecord {
            name: "Jill".to_string(),
            phones: vec![],
            email: "None".to_string(),
            birthday: "None".to_string(),
        };
        assert!(Record::try_from(valid.clone()).is_ok());

        let bad_phone = StoredRecord {
            phones: vec!["12".to_string()],
            ..valid.clone()
        };
        assert!(Record::try_from(bad_phone).is_err());

        let bad_email = StoredRecord {
            email: "jill".to_string(),
            ..valid.clone()
        };
        assert!(Record::try_from(bad_email).is_err());

        let bad_birthday = StoredRecord {
            birthday: "1990-02-30".to_string(),
            ..valid
        };
        assert!(Record::try_from(bad_birthday).is_err());
    }

    #[test]
    fn test_missing_field_fails_deserialization() {
        let result: Result<StoredRecord, _> =
            serde_json::from_str(r#"{"name": "Jill", "phones": [], "email": "None"}"#);
        assert!(result.is_err());
    }
}
