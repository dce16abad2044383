//! Binary search over a per-call sorted view.

use super::SearchStrategy;
use crate::models::Entry;
use std::cmp::Ordering;

/// Binary search by name.
///
/// Each call sorts a vector of references by name (byte order, which is
/// code-point order for UTF-8 strings) and searches that; the caller's slice
/// is never reordered. Sorting dominates, so a lookup costs O(n log n).
///
/// When several entries share a name, which of them is returned depends on
/// where the midpoints land and is not guaranteed to be the first one stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl BinarySearch {
    /// Sorted view of `entries` ordered by name. Stable, so equal names keep
    /// their stored relative order.
    pub fn sorted_view(entries: &[Entry]) -> Vec<&Entry> {
        let mut view: Vec<&Entry> = entries.iter().collect();
        view.sort_by(|a, b| a.name().cmp(b.name()));
        view
    }
}

impl SearchStrategy for BinarySearch {
    fn name(&self) -> &'static str {
        "binary"
    }

    fn find<'a>(&self, entries: &'a [Entry], name: &str) -> Option<&'a Entry> {
        let view = Self::sorted_view(entries);

        if view.is_empty() {
            return None;
        }

        // Inclusive range [low, high].
        let mut low = 0;
        let mut high = view.len() - 1;

        while low <= high {
            let mid = low + (high - low) / 2;
            match name.cmp(view[mid].name()) {
                Ordering::Equal => return Some(view[mid]),
                Ordering::Less => {
                    // Nothing left below index 0.
                    if mid == 0 {
                        break;
                    }
                    high = mid - 1;
                }
                Ordering::Greater => low = mid + 1,
            }
        }

        None
    }
}
