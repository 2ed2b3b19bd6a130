//! Event and occurrence types.
//!
//! A [`CalendarEvent`] is what the feed parser extracts from one event block.
//! A [`NextOccurrence`] is what the selector reduces a location's events to.

use chrono::{DateTime, Utc};

/// A labelled event with a known UTC start instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub label: String,
    pub start: DateTime<Utc>,
}

impl CalendarEvent {
    pub fn new(label: impl Into<String>, start: DateTime<Utc>) -> Self {
        CalendarEvent {
            label: label.into(),
            start,
        }
    }
}

/// The next occurrence for a location.
///
/// The derived ordering puts every `Upcoming` instant (ascending) before
/// `NoneFound`, which is the order the report is sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NextOccurrence {
    Upcoming(DateTime<Utc>),
    NoneFound,
}

impl NextOccurrence {
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            NextOccurrence::Upcoming(dt) => Some(*dt),
            NextOccurrence::NoneFound => None,
        }
    }

    pub fn is_none_found(&self) -> bool {
        matches!(self, NextOccurrence::NoneFound)
    }
}

impl From<Option<DateTime<Utc>>> for NextOccurrence {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(NextOccurrence::NoneFound, NextOccurrence::Upcoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_upcoming_sorts_before_none_found() {
        let early = NextOccurrence::Upcoming(Utc.with_ymd_and_hms(2025, 6, 3, 20, 0, 0).unwrap());
        let late = NextOccurrence::Upcoming(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap());

        assert!(early < late);
        assert!(late < NextOccurrence::NoneFound);
        assert!(early < NextOccurrence::NoneFound);
    }

    #[test]
    fn test_from_option() {
        let dt = Utc.with_ymd_and_hms(2025, 6, 3, 20, 0, 0).unwrap();

        assert_eq!(NextOccurrence::from(Some(dt)), NextOccurrence::Upcoming(dt));
        assert_eq!(NextOccurrence::from(None), NextOccurrence::NoneFound);
        assert_eq!(NextOccurrence::NoneFound.instant(), None);
    }
}
