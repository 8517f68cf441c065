//! Set difference over column names

use std::collections::BTreeSet;

/// Column names present in exactly one of two headers
///
/// Headers are compared as sets, so duplicate names collapse and column
/// order is ignored. Both lists are sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderDiff {
    pub only_in_first: Vec<String>,
    pub only_in_second: Vec<String>,
}

impl HeaderDiff {
    pub fn compute<S: AsRef<str>>(first: &[S], second: &[S]) -> Self {
        let first: BTreeSet<&str> = first.iter().map(AsRef::as_ref).collect();
        let second: BTreeSet<&str> = second.iter().map(AsRef::as_ref).collect();

        // BTreeSet iterates in order, so the differences come out sorted
        let only_in_first: Vec<String> = first.difference(&second).map(|s| s.to_string()).collect();
        let only_in_second: Vec<String> = second.difference(&first).map(|s| s.to_string()).collect();

        log::debug!(
            "Header diff: {} only in first, {} only in second",
            only_in_first.len(),
            only_in_second.len()
        );

        Self {
            only_in_first,
            only_in_second,
        }
    }

    /// True when both headers hold the same set of names
    pub fn is_empty(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }

    /// The diff as seen with the two headers exchanged
    pub fn swapped(self) -> Self {
        Self {
            only_in_first: self.only_in_second,
            only_in_second: self.only_in_first,
        }
    }
}
