//! Name lookup strategies over a slice of entries.
//!
//! Both strategies match names exactly (case-sensitive). For a name stored
//! once they return the same entry; with duplicate names they may differ.

pub mod binary;
pub mod linear;

pub use binary::BinarySearch;
pub use linear::LinearSearch;

use crate::models::Entry;

/// A way of finding an entry by name.
///
/// Implementations must not assume `entries` is sorted and must not reorder
/// it.
pub trait SearchStrategy {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Find an entry whose name equals `name`, or `None`.
    fn find<'a>(&self, entries: &'a [Entry], name: &str) -> Option<&'a Entry>;
}
