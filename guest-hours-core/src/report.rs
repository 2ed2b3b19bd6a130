//! Ordered per-location results.

use crate::event::NextOccurrence;

/// One row of the report: a location and its next occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationEntry {
    pub location: String,
    pub next: NextOccurrence,
}

impl LocationEntry {
    pub fn new(location: impl Into<String>, next: NextOccurrence) -> Self {
        LocationEntry {
            location: location.into(),
            next,
        }
    }
}

/// Locations ordered by their next occurrence.
///
/// Upcoming instants come first in ascending order, followed by locations
/// with nothing scheduled. The sort is stable, so equal keys keep the order
/// the entries were supplied in (configuration order). Consumers render the
/// entries as-is and must not re-sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationReport {
    entries: Vec<LocationEntry>,
}

impl LocationReport {
    pub fn from_entries(mut entries: Vec<LocationEntry>) -> Self {
        entries.sort_by_key(|entry| entry.next);
        LocationReport { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Location names in report order.
    pub fn locations(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.location.as_str()).collect()
    }

    pub fn get(&self, location: &str) -> Option<NextOccurrence> {
        self.entries
            .iter()
            .find(|e| e.location == location)
            .map(|e| e.next)
    }
}

impl<'a> IntoIterator for &'a LocationReport {
    type Item = &'a LocationEntry;
    type IntoIter = std::slice::Iter<'a, LocationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
