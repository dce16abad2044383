//! Address Bloc - a small in-memory address book.
//!
//! Entries (name, phone number, email) can be added, removed, cleared and
//! imported from delimited text, then looked up by exact name with either a
//! linear scan or a binary search over a sorted view.
//!
//! # Architecture
//!
//! - **models**: The `Entry` record and the importer's `RawEntry` row
//! - **book**: `AddressBook`, the ordered entry collection and its operations
//! - **search**: `SearchStrategy` with linear and binary implementations
//! - **importer**: `Importer` trait and the CSV-backed `CsvImporter`
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for imports and configuration
//!
//! # Example
//!
//! ```
//! use address_bloc::AddressBook;
//!
//! let mut book = AddressBook::new();
//! book.add_entry("Bill", "555-555-4854", "bill@blocmail.com");
//! book.add_entry("Bob", "555-555-5415", "bob@blocmail.com");
//!
//! assert_eq!(book.binary_search("Bob").unwrap().email(), "bob@blocmail.com");
//! assert!(book.iterative_search("Billy").is_none());
//! ```

pub mod book;
pub mod config;
pub mod error;
pub mod importer;
pub mod models;
pub mod search;

pub use book::AddressBook;
pub use config::Config;
pub use error::{ConfigError, ImportError};
pub use importer::{CsvImporter, ImportOptions, Importer};
pub use models::{Entry, RawEntry};
pub use search::{BinarySearch, LinearSearch, SearchStrategy};
