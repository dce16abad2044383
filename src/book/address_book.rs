//! In-memory address book.

use crate::error::ImportResult;
use crate::importer::{CsvImporter, ImportOptions, Importer};
use crate::models::Entry;
use crate::search::{BinarySearch, LinearSearch, SearchStrategy};
use std::path::Path;
use tracing::{debug, info};

/// An ordered collection of entries.
///
/// Entries keep the order they were added or imported in. Duplicate
/// entries are allowed. Searching never reorders the stored entries.
///
/// There is no internal locking; share a book across threads by wrapping
/// the whole book in a `Mutex`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    entries: Vec<Entry>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in stored order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new entry. No uniqueness check is made.
    pub fn add_entry(
        &mut self,
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) {
        let entry = Entry::new(name, phone_number, email);
        debug!(name = entry.name(), "Adding entry");
        self.entries.push(entry);
    }

    /// Remove the first stored entry whose name, phone number and email all
    /// match exactly, and return it.
    ///
    /// Any further identical entries stay in the book. Returns `None` and
    /// leaves the book unchanged when nothing matches.
    pub fn remove_entry(&mut self, name: &str, phone_number: &str, email: &str) -> Option<Entry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.matches(name, phone_number, email))?;

        debug!(name, index, "Removing entry");
        Some(self.entries.remove(index))
    }

    /// Remove every entry.
    pub fn demolish_entries(&mut self) {
        debug!(count = self.entries.len(), "Demolishing all entries");
        self.entries.clear();
    }

    /// Append every row the importer yields, in source order, and return how
    /// many were added.
    ///
    /// Imports accumulate; the book is not cleared first. If the importer
    /// fails, the book is left as it was.
    pub fn import_from<I: Importer + ?Sized>(&mut self, importer: &I) -> ImportResult<usize> {
        let rows = importer.read_rows()?;
        let count = rows.len();

        self.entries.extend(rows.into_iter().map(Entry::from));

        info!(imported = count, total = self.entries.len(), "Imported entries");
        Ok(count)
    }

    /// Import a comma-delimited file with default reader settings.
    pub fn import_from_csv(&mut self, path: impl AsRef<Path>) -> ImportResult<usize> {
        self.import_from_csv_with(path, &ImportOptions::default())
    }

    /// Import a delimited file with explicit reader settings.
    pub fn import_from_csv_with(
        &mut self,
        path: impl AsRef<Path>,
        options: &ImportOptions,
    ) -> ImportResult<usize> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Importing CSV");
        let importer = CsvImporter::from_path(path).with_options(options.clone());
        self.import_from(&importer)
    }

    /// Look up an entry by name with the given strategy.
    pub fn search_with(&self, strategy: &dyn SearchStrategy, name: &str) -> Option<&Entry> {
        let found = strategy.find(&self.entries, name);
        debug!(
            strategy = strategy.name(),
            name,
            found = found.is_some(),
            "Searched entries"
        );
        found
    }

    /// First entry, in stored order, whose name equals `name`.
    pub fn iterative_search(&self, name: &str) -> Option<&Entry> {
        self.search_with(&LinearSearch, name)
    }

    /// Binary search by name over a sorted copy of the entry references.
    ///
    /// With duplicate names, any one of them may be returned.
    pub fn binary_search(&self, name: &str) -> Option<&Entry> {
        self.search_with(&BinarySearch, name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
