use address_bloc::error::{ImportError, ImportResult};
use address_bloc::importer::Importer;
use address_bloc::models::RawEntry;
use std::sync::{Arc, Mutex};

/// Mock importer for testing.
///
/// Serves a fixed list of rows (or a failure) and counts how many times it
/// was read.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockImporter {
    rows: Arc<Mutex<Vec<RawEntry>>>,
    fail_at_line: Option<u64>,
    read_count: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockImporter {
    /// Create a new MockImporter with no rows.
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            fail_at_line: None,
            read_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a MockImporter whose reads fail as if `line` were malformed.
    pub fn failing(line: u64) -> Self {
        Self {
            fail_at_line: Some(line),
            ..Self::new()
        }
    }

    /// Add a row to serve.
    pub fn add_row(&self, name: &str, phone_number: &str, email: &str) {
        let mut rows = self.rows.lock().unwrap();
        rows.push(RawEntry {
            name: name.to_string(),
            phone_number: phone_number.to_string(),
            email: email.to_string(),
        });
    }

    /// Get the number of times rows were read.
    pub fn read_count(&self) -> usize {
        *self.read_count.lock().unwrap()
    }
}

impl Default for MockImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Importer for MockImporter {
    fn read_rows(&self) -> ImportResult<Vec<RawEntry>> {
        *self.read_count.lock().unwrap() += 1;

        if let Some(line) = self.fail_at_line {
            return Err(ImportError::Malformed { line, fields: 2 });
        }

        Ok(self.rows.lock().unwrap().clone())
    }
}
