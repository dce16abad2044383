//! Delimited-text importer built on the `csv` crate.
//!
//! One entry per line: name, phone number, email. No header row unless
//! configured otherwise.

use super::Importer;
use crate::error::{ImportError, ImportResult};
use crate::models::RawEntry;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Number of fields every row must carry.
const FIELDS_PER_ROW: usize = 3;

/// Reader settings for delimited sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// Field delimiter (default: `,`)
    pub delimiter: u8,

    /// Whether the first line is a header to skip (default: false)
    pub has_headers: bool,

    /// Trim surrounding whitespace from every field (default: true)
    pub trim: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
            trim: true,
        }
    }
}

#[derive(Debug, Clone)]
enum CsvSource {
    Path(PathBuf),
    Text(String),
}

/// Reads entries from a file or an in-memory string.
#[derive(Debug, Clone)]
pub struct CsvImporter {
    source: CsvSource,
    options: ImportOptions,
}

impl CsvImporter {
    /// Importer for a file on disk. The file is opened when rows are read.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            source: CsvSource::Path(path.as_ref().to_path_buf()),
            options: ImportOptions::default(),
        }
    }

    /// Importer for text already in memory.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            source: CsvSource::Text(text.into()),
            options: ImportOptions::default(),
        }
    }

    /// Replace the reader settings.
    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    fn read_from<R: Read>(&self, reader: R) -> ImportResult<Vec<RawEntry>> {
        let trim = if self.options.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        };

        // Flexible so short and long rows reach our own check with a line number.
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(self.options.has_headers)
            .trim(trim)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            // A whitespace-only line trims down to empty fields.
            if self.options.trim && record.iter().all(str::is_empty) {
                continue;
            }
            if record.len() != FIELDS_PER_ROW {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                warn!(line, fields = record.len(), "Rejecting malformed row");
                return Err(ImportError::Malformed {
                    line,
                    fields: record.len(),
                });
            }
            rows.push(record.deserialize::<RawEntry>(None)?);
        }

        Ok(rows)
    }
}

impl Importer for CsvImporter {
    fn read_rows(&self) -> ImportResult<Vec<RawEntry>> {
        let rows = match &self.source {
            CsvSource::Path(path) => {
                let file = File::open(path).map_err(|source| ImportError::Io {
                    path: path.clone(),
                    source,
                })?;
                self.read_from(file)?
            }
            CsvSource::Text(text) => self.read_from(text.as_bytes())?,
        };

        debug!(rows = rows.len(), "Read CSV rows");
        Ok(rows)
    }
}
