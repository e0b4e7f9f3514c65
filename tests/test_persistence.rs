//! Save/load round trips through a real JSON file.

use contact_book::{AddressBook, Command, ContactBot, LoadReport, Outcome, Phone, Record};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn scratch() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("address_book.json");
    (dir, path)
}

fn sample_book(path: &Path) -> AddressBook {
    let (mut book, report) = AddressBook::open(path);
    assert_eq!(report, LoadReport::Missing);

    let mut bill = Record::with_details("Bill", Some("1985-03-15"), Some("bill@example.com"))
        .unwrap();
    bill.add_phone(Phone::new("0501234567").unwrap());
    bill.add_phone(Phone::new("0679876543").unwrap());
    bill.add_phone(Phone::new("0501234567").unwrap());
    book.add_record(bill);

    let mut jill = Record::new("Jill");
    jill.add_phone(Phone::new("0931112233").unwrap());
    book.add_record(jill);

    book.add_record(Record::with_details("Leap", Some("2024-02-29"), None).unwrap());
    book
}

#[test]
fn test_round_trip_is_lossless() {
    let (_dir, path) = scratch();
    let mut book = sample_book(&path);
    book.save_to_storage().unwrap();

    let (reloaded, report) = AddressBook::open(&path);
    assert_eq!(report, LoadReport::Loaded(3));

    let original: Vec<&Record> = book.records().collect();
    let restored: Vec<&Record> = reloaded.records().collect();
    assert_eq!(original, restored);
}

#[test]
fn test_saved_file_layout() {
    let (_dir, path) = scratch();
    sample_book(&path).save_to_storage().unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {
                "name": "Bill",
                "phones": ["0501234567", "0679876543", "0501234567"],
                "email": "bill@example.com",
                "birthday": "1985-03-15"
            },
            {
                "name": "Jill",
                "phones": ["0931112233"],
                "email": "None",
                "birthday": "None"
            },
            {
                "name": "Leap",
                "phones": [],
                "email": "None",
                "birthday": "2024-02-29"
            }
        ])
    );
}

#[test]
fn test_save_overwrites_previous_contents() {
    let (_dir, path) = scratch();
    let mut book = sample_book(&path);
    book.save_to_storage().unwrap();

    book.delete("Bill");
    book.delete("Jill");
    book.save_to_storage().unwrap();

    let (reloaded, report) = AddressBook::open(&path);
    assert_eq!(report, LoadReport::Loaded(1));
    assert!(reloaded.find("Leap").is_some());
    assert!(reloaded.find("Bill").is_none());
}

#[test]
fn test_load_accepts_hand_written_file() {
    let (_dir, path) = scratch();
    fs::write(
        &path,
        r#"[
    {
        "name": "Anna",
        "phones": ["0505551234"],
        "email": "anna@mail.com",
        "birthday": "None"
    }
]"#,
    )
    .unwrap();

    let (book, report) = AddressBook::open(&path);
    assert_eq!(report, LoadReport::Loaded(1));
    let anna = book.find("Anna").unwrap();
    assert_eq!(anna.phones(), ["0505551234"]);
    assert_eq!(anna.email.as_ref().unwrap().as_str(), "anna@mail.com");
    assert!(anna.birthday.is_absent());
}

#[test]
fn test_empty_file_starts_empty() {
    let (_dir, path) = scratch();
    fs::write(&path, "").unwrap();

    let (book, report) = AddressBook::open(&path);
    assert!(matches!(report, LoadReport::Failed(_)));
    assert!(book.is_empty());
}

#[test]
fn test_empty_array_starts_empty() {
    let (_dir, path) = scratch();
    fs::write(&path, "[]").unwrap();

    let (book, report) = AddressBook::open(&path);
    assert_eq!(report, LoadReport::Empty);
    assert!(book.is_empty());
}

#[test]
fn test_record_missing_field_fails_whole_load() {
    let (_dir, path) = scratch();
    fs::write(
        &path,
        r#"[
            {"name": "Anna", "phones": [], "email": "None", "birthday": "None"},
            {"name": "Bob", "phones": []}
        ]"#,
    )
    .unwrap();

    let (book, report) = AddressBook::open(&path);
    assert!(matches!(report, LoadReport::Failed(_)));
    assert!(book.is_empty());
}

#[test]
fn test_record_with_bad_birthday_fails_whole_load() {
    let (_dir, path) = scratch();
    fs::write(
        &path,
        r#"[{"name": "Anna", "phones": [], "email": "None", "birthday": "2023-02-30"}]"#,
    )
    .unwrap();

    let (book, report) = AddressBook::open(&path);
    match report {
        LoadReport::Failed(reason) => assert!(reason.contains("2023-02-30")),
        other => panic!("Expected Failed, got {:?}", other),
    }
    assert!(book.is_empty());
}

#[test]
fn test_save_to_unwritable_location_fails() {
    let (dir, _) = scratch();
    // A directory cannot be overwritten as a file.
    let (mut book, _) = AddressBook::open(dir.path());
    assert!(book.save_to_storage().is_err());
}

#[test]
fn test_exit_after_failed_load_keeps_original_file() {
    let (_dir, path) = scratch();
    let original = r#"[
    {"name": "Anna", "phones": ["0505551234"], "email": "None", "birthday": "None"},
    {"name": "Bob", "phones": ["067-111-22"], "email": "None", "birthday": "None"}
]"#;
    fs::write(&path, original).unwrap();

    let (book, report) = AddressBook::open(&path);
    assert!(matches!(report, LoadReport::Failed(_)));

    let mut bot = ContactBot::new(book, 10);
    match bot.execute(Command::parse("exit")) {
        Outcome::Quit(message) => {
            assert!(message.contains("address_book.json.bak"));
            assert!(message.ends_with("Good bye!"));
        }
        other => panic!("Expected Quit, got {:?}", other),
    }

    let backup = path.with_file_name("address_book.json.bak");
    assert_eq!(fs::read_to_string(&backup).unwrap(), original);
    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
}

#[test]
fn test_every_saved_book_reloads() {
    let (_dir, path) = scratch();
    let (mut book, _) = AddressBook::open(&path);

    // Phones only enter a record through `Phone`, so an invalid one is
    // rejected before it can be saved.
    let mut anna = Record::new("Anna");
    for candidate in ["0505551234", "not a phone", "067-111-22", "0671112233"] {
        if let Ok(phone) = Phone::new(candidate) {
            anna.add_phone(phone);
        }
    }
    assert_eq!(anna.phones(), ["0505551234", "0671112233"]);
    book.add_record(anna);
    book.save_to_storage().unwrap();

    let (reloaded, report) = AddressBook::open(&path);
    assert_eq!(report, LoadReport::Loaded(1));
    assert_eq!(reloaded.find("Anna"), book.find("Anna"));
}
