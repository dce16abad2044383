//! Integration tests for AddressBook against the bundled CSV fixtures.

use address_bloc::{AddressBook, Entry};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn bloc_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.import_from_csv(fixture("entries.csv"))
        .expect("entries.csv should import");
    book
}

fn check_entry(entry: &Entry, expected_name: &str, expected_number: &str, expected_email: &str) {
    assert_eq!(entry.name(), expected_name);
    assert_eq!(entry.phone_number(), expected_number);
    assert_eq!(entry.email(), expected_email);
}

const BLOC_ENTRIES: [(&str, &str, &str); 5] = [
    ("Bill", "555-555-4854", "bill@blocmail.com"),
    ("Bob", "555-555-5415", "bob@blocmail.com"),
    ("Joe", "555-555-3660", "joe@blocmail.com"),
    ("Sally", "555-555-4646", "sally@blocmail.com"),
    ("Sussie", "555-555-2036", "sussie@blocmail.com"),
];

#[test]
fn test_new_book_starts_empty() {
    let book = AddressBook::new();
    assert_eq!(book.entries().len(), 0);
}

#[test]
fn test_demolish_entries_deletes_everything() {
    let mut book = AddressBook::new();
    book.add_entry("MaryRose", "098.765.6543", "maryrose@bloc.com");

    book.demolish_entries();
    assert_eq!(book.entries().len(), 0);
}

#[test]
fn test_demolish_entries_on_empty_book() {
    let mut book = AddressBook::new();
    book.demolish_entries();
    assert!(book.is_empty());
}

#[test]
fn test_add_entry_adds_only_one_entry() {
    let mut book = AddressBook::new();
    book.add_entry("Ada Lovelace", "010.012.1815", "augusta.king@lovelace.com");

    assert_eq!(book.entries().len(), 1);
    check_entry(
        &book.entries()[0],
        "Ada Lovelace",
        "010.012.1815",
        "augusta.king@lovelace.com",
    );
}

#[test]
fn test_add_entry_count_and_order_match_calls() {
    let mut book = AddressBook::new();
    let names = ["Zed", "Amy", "Zed", "Kit", "Amy"];
    for (i, name) in names.iter().enumerate() {
        book.add_entry(*name, format!("555-000-{:04}", i), format!("{}@bloc.com", i));
    }

    assert_eq!(book.len(), names.len());
    for (i, entry) in book.iter().enumerate() {
        assert_eq!(entry.name(), names[i]);
        assert_eq!(entry.phone_number(), format!("555-000-{:04}", i));
    }
}

#[test]
fn test_remove_entry_by_all_three_fields() {
    let mut book = AddressBook::new();
    book.add_entry("Mary Rose", "010.230.3978", "mary.rose@rose.com");

    let name = "Ada Lovelace";
    let phone_number = "010.012.1815";
    let email_address = "augusta.king@lovelace.com";
    book.add_entry(name, phone_number, email_address);

    assert_eq!(book.entries().len(), 2);
    book.remove_entry(name, phone_number, email_address);
    assert_eq!(book.entries().len(), 1);
    assert_eq!(book.entries()[0].name(), "Mary Rose");
}

#[test]
fn test_remove_entry_without_match_changes_nothing() {
    let mut book = bloc_book();
    let before: Vec<Entry> = book.entries().to_vec();

    assert!(book
        .remove_entry("Bob", "555-555-5415", "robert@blocmail.com")
        .is_none());
    assert_eq!(book.entries(), before.as_slice());
}

#[test]
fn test_import_from_csv_reads_every_entry_in_order() {
    let book = bloc_book();
    assert_eq!(book.entries().len(), 5);

    for (entry, (name, phone, email)) in book.iter().zip(BLOC_ENTRIES.iter()) {
        check_entry(entry, name, phone, email);
    }
}

#[test]
fn test_import_from_entries_2() {
    let mut book = AddressBook::new();
    let count = book.import_from_csv(fixture("entries_2.csv")).unwrap();

    assert_eq!(count, 3);
    assert_eq!(book.entries().len(), 3);
    check_entry(&book.entries()[0], "Tim", "553-553-4854", "tim@blocmail.com");
    check_entry(&book.entries()[1], "Tom", "552-552-5415", "tom@blocmail.com");
    check_entry(&book.entries()[2], "Tammy", "551-551-3660", "tammy@blocmail.com");
}

#[test]
fn test_sequential_imports_accumulate() {
    let mut book = bloc_book();
    book.import_from_csv(fixture("entries_2.csv")).unwrap();

    assert_eq!(book.len(), 8);
    assert_eq!(book.entries()[4].name(), "Sussie");
    assert_eq!(book.entries()[5].name(), "Tim");
    assert!(book.binary_search("Tammy").is_some());
    assert!(book.iterative_search("Bill").is_some());
}

#[test]
fn test_binary_search_finds_each_imported_entry() {
    let book = bloc_book();
    for (name, phone, email) in BLOC_ENTRIES {
        let entry = book
            .binary_search(name)
            .unwrap_or_else(|| panic!("{} should be found", name));
        check_entry(entry, name, phone, email);
    }
}

#[test]
fn test_iterative_search_finds_each_imported_entry() {
    let book = bloc_book();
    for (name, phone, email) in BLOC_ENTRIES {
        let entry = book
            .iterative_search(name)
            .unwrap_or_else(|| panic!("{} should be found", name));
        check_entry(entry, name, phone, email);
    }
}

#[test]
fn test_searches_for_non_existent_entries() {
    let book = bloc_book();
    for name in ["Dan", "Billy", "bob", "Sus", "Zachary", "Aaron"] {
        assert!(book.binary_search(name).is_none(), "binary found {}", name);
        assert!(book.iterative_search(name).is_none(), "iterative found {}", name);
    }
}

#[test]
fn test_searches_on_empty_book() {
    let book = AddressBook::new();
    assert!(book.binary_search("Bob").is_none());
    assert!(book.iterative_search("Bob").is_none());
}

#[test]
fn test_binary_search_does_not_reorder_entries() {
    let mut book = AddressBook::new();
    book.add_entry("Sussie", "555-555-2036", "sussie@blocmail.com");
    book.add_entry("Joe", "555-555-3660", "joe@blocmail.com");
    book.add_entry("Bill", "555-555-4854", "bill@blocmail.com");

    assert!(book.binary_search("Bill").is_some());
    assert!(book.binary_search("Nobody").is_none());

    let names: Vec<&str> = book.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Sussie", "Joe", "Bill"]);
}

#[test]
fn test_empty_fields_entry_is_distinct_from_not_found() {
    let mut book = AddressBook::new();
    book.add_entry("Ghost", "", "");

    let found = book.iterative_search("Ghost").unwrap();
    assert_eq!(found.phone_number(), "");
    assert!(book.iterative_search("").is_none());
}
