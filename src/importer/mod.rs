//! Importers that turn an external source into raw entry rows.
//!
//! The address book only sees [`RawEntry`] rows; parsing and row-shape
//! checks live here.

pub mod csv_importer;

pub use csv_importer::{CsvImporter, ImportOptions};

use crate::error::ImportResult;
use crate::models::RawEntry;

/// A source of (name, phone number, email) rows.
///
/// Implementations return every row or an error; never a partial list.
pub trait Importer {
    /// Read all rows in source order.
    fn read_rows(&self) -> ImportResult<Vec<RawEntry>>;
}
