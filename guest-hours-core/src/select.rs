//! Next-occurrence selection.

use chrono::{DateTime, Utc};

use crate::event::{CalendarEvent, NextOccurrence};

/// Pick the earliest event starting strictly after `now`.
///
/// An event starting exactly at `now` is not upcoming. Events sharing the
/// same instant are interchangeable since only the instant is returned.
pub fn select_next(events: &[CalendarEvent], now: DateTime<Utc>) -> NextOccurrence {
    events
        .iter()
        .map(|event| event.start)
        .filter(|start| *start > now)
        .min()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn event_at(start: DateTime<Utc>) -> CalendarEvent {
        CalendarEvent::new("Member Guest Hours", start)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_select_picks_earliest_future_event() {
        let events = vec![
            event_at(now() + Duration::days(10)),
            event_at(now() - Duration::days(1)),
            event_at(now() + Duration::hours(3)),
            event_at(now() + Duration::days(2)),
        ];

        assert_eq!(
            select_next(&events, now()),
            NextOccurrence::Upcoming(now() + Duration::hours(3))
        );
    }

    #[test]
    fn test_select_excludes_event_at_exactly_now() {
        let events = vec![event_at(now())];
        assert_eq!(select_next(&events, now()), NextOccurrence::NoneFound);

        let events = vec![event_at(now()), event_at(now() + Duration::seconds(1))];
        assert_eq!(
            select_next(&events, now()),
            NextOccurrence::Upcoming(now() + Duration::seconds(1))
        );
    }

    #[test]
    fn test_select_none_found_when_all_past_or_empty() {
        assert_eq!(select_next(&[], now()), NextOccurrence::NoneFound);

        let events = vec![
            event_at(now() - Duration::days(30)),
            event_at(now() - Duration::minutes(1)),
        ];
        assert_eq!(select_next(&events, now()), NextOccurrence::NoneFound);
    }

    #[test]
    fn test_select_handles_duplicate_instants() {
        let start = now() + Duration::days(1);
        let events = vec![event_at(start), event_at(start)];

        assert_eq!(select_next(&events, now()), NextOccurrence::Upcoming(start));
    }

    #[test]
    fn test_select_never_returns_instant_at_or_before_now() {
        let offsets = [-120, -1, 0, 1, 45, 3600, -3600];
        let events: Vec<_> = offsets
            .iter()
            .map(|secs| event_at(now() + Duration::seconds(*secs)))
            .collect();

        // Sliding `now` across every event instant
        for probe in events.iter().map(|e| e.start) {
            match select_next(&events, probe) {
                NextOccurrence::Upcoming(dt) => assert!(dt > probe),
                NextOccurrence::NoneFound => {
                    assert!(events.iter().all(|e| e.start <= probe));
                }
            }
        }
    }
}
