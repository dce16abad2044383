//! The address book and its operations.

pub mod address_book;

pub use address_book::AddressBook;
