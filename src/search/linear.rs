//! Linear scan in stored order.

use super::SearchStrategy;
use crate::models::Entry;

/// Returns the first entry, in stored order, whose name matches. O(n).
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

impl SearchStrategy for LinearSearch {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn find<'a>(&self, entries: &'a [Entry], name: &str) -> Option<&'a Entry> {
        entries.iter().find(|entry| entry.name() == name)
    }
}
