//! Persistence tests for the JSON file store and the session lifecycle.

mod mocks;

use chrono::NaiveDate;
use contact_book::{
    run, AppContext, Config, ContactDirectory, ContactName, ContactRecord, ContactStore,
    JsonFileStore,
};
use mocks::MockContactStore;

fn sample_book() -> ContactDirectory {
    let mut dir = ContactDirectory::new();

    let mut maria = ContactRecord::new(ContactName::new("maria").unwrap());
    maria.add_phone("0123456789").unwrap();
    maria.add_phone("0987654321").unwrap();
    maria.add_birthday("12.06.1990").unwrap();
    dir.add_record(maria);

    let mut bob = ContactRecord::new(ContactName::new("bob").unwrap());
    bob.add_phone("1111111111").unwrap();
    dir.add_record(bob);

    dir.add_record(ContactRecord::new(ContactName::new("nobody").unwrap()));
    dir
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

#[test]
fn test_file_round_trip_preserves_book() {
    let tmp = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(tmp.path().join("addressbook.json"));

    let book = sample_book();
    store.save(&book).unwrap();
    let loaded = store.load().unwrap();

    let mut names: Vec<&str> = loaded.records().map(|r| r.name().as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Bob", "Maria", "Nobody"]);

    for record in book.records() {
        let other = loaded.find(record.name().as_str()).unwrap();
        assert_eq!(other.phones(), record.phones());
        assert_eq!(other.birthday(), record.birthday());
    }
}

#[test]
fn test_save_overwrites_previous_file() {
    let tmp = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(tmp.path().join("addressbook.json"));

    store.save(&sample_book()).unwrap();
    store.save(&ContactDirectory::new()).unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_missing_file_loads_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(tmp.path().join("never-written.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_session_loads_and_saves_through_store() {
    let store = MockContactStore::with_directory(sample_book());
    let ctx = AppContext::open(Box::new(store.clone()), &Config::default()).unwrap();
    assert_eq!(store.get_call_count("load"), 1);

    let mut output = Vec::new();
    run(
        ctx,
        "phone maria\nadd bob 2222222222\nclose\n".as_bytes(),
        &mut output,
        today,
    )
    .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Contact name: Maria, phones: 0123456789; 0987654321"));
    assert!(output.trim_end().ends_with("Good bye"));

    assert_eq!(store.get_call_count("save"), 1);
    let saved = store.saved().unwrap();
    assert_eq!(saved.find("bob").unwrap().phones().len(), 2);
}

#[test]
fn test_failed_save_surfaces_error() {
    let store = MockContactStore::new();
    store.fail_saves();
    let ctx = AppContext::open(Box::new(store.clone()), &Config::default()).unwrap();

    let mut output = Vec::new();
    let result = run(ctx, "exit\n".as_bytes(), &mut output, today);
    assert!(result.is_err());
    assert_eq!(store.get_call_count("save"), 1);
}

#[test]
fn test_session_against_real_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("addressbook.json");
    let config = Config {
        data_file: path.clone(),
        ..Config::default()
    };

    let ctx = AppContext::open(Box::new(JsonFileStore::new(&path)), &config).unwrap();
    let mut output = Vec::new();
    run(
        ctx,
        "add ann 1111111111\nadd-birthday ann 01.01.2000\nexit\n".as_bytes(),
        &mut output,
        today,
    )
    .unwrap();

    let reopened = AppContext::open(Box::new(JsonFileStore::new(&path)), &config).unwrap();
    let ann = reopened.directory().find("Ann").unwrap();
    assert_eq!(ann.phones()[0].as_str(), "1111111111");
    assert_eq!(ann.birthday().unwrap().to_string(), "01.01.2000");
}
