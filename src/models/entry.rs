//! Entry model representing one contact in the address book.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact record: name, phone number and email.
///
/// Fields are fixed at construction and only readable afterwards. Phone
/// number and email are free-form text; nothing about their format is
/// checked.
///
/// # Example
///
/// ```
/// use address_bloc::Entry;
///
/// let entry = Entry::new("Ada Lovelace", "010.012.1815", "augusta.king@lovelace.com");
/// assert_eq!(entry.name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct Entry {
    name: String,
    phone_number: String,
    email: String,
}

impl Entry {
    /// Create a new entry from name, phone number and email, in that order.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }

    /// The contact's name; the key both searches use.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether all three fields equal the given values exactly (case-sensitive).
    pub fn matches(&self, name: &str, phone_number: &str, email: &str) -> bool {
        self.name == name && self.phone_number == phone_number && self.email == email
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Phone Number: {}", self.phone_number)?;
        write!(f, "Email: {}", self.email)
    }
}

/// One row as yielded by an importer, before it becomes an [`Entry`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        Entry::new(raw.name, raw.phone_number, raw.email)
    }
}
