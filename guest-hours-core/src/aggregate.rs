//! Multi-location aggregation.
//!
//! Locations are processed one after another in configuration order. A feed
//! that can't be fetched leaves its location out of the report and is
//! recorded as a [`FetchFailure`]; the remaining locations still run.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::FeedsConfig;
use crate::error::HoursError;
use crate::event::NextOccurrence;
use crate::feed::parse_events;
use crate::fetch::FeedFetcher;
use crate::report::{LocationEntry, LocationReport};
use crate::select::select_next;

/// A location whose feed could not be fetched.
#[derive(Debug)]
pub struct FetchFailure {
    pub location: String,
    pub url: String,
    pub error: HoursError,
}

#[derive(Debug, Default)]
pub struct AggregateOutcome {
    pub report: LocationReport,
    pub failures: Vec<FetchFailure>,
}

impl AggregateOutcome {
    /// True when there were feeds to fetch and none of them succeeded.
    pub fn all_failed(&self) -> bool {
        !self.failures.is_empty() && self.report.is_empty()
    }
}

/// Build the report for every configured location.
pub async fn aggregate<F: FeedFetcher>(
    feeds: &FeedsConfig,
    fetcher: &F,
    target_label: &str,
    now: DateTime<Utc>,
) -> AggregateOutcome {
    let mut entries = Vec::with_capacity(feeds.len());
    let mut failures = Vec::new();

    for (location, url) in feeds.iter() {
        info!(location, "Processing location");

        match fetcher.fetch(url).await {
            Ok(raw) => {
                let next = next_occurrence(&raw, target_label, now);
                if next.is_none_found() {
                    info!(location, label = target_label, "No upcoming events found");
                }
                entries.push(LocationEntry::new(location, next));
            }
            Err(error) => {
                warn!(location, %error, "Skipping location");
                failures.push(FetchFailure {
                    location: location.to_string(),
                    url: url.to_string(),
                    error,
                });
            }
        }
    }

    AggregateOutcome {
        report: LocationReport::from_entries(entries),
        failures,
    }
}

/// Parse one feed and select its next occurrence.
pub fn next_occurrence(raw: &str, target_label: &str, now: DateTime<Utc>) -> NextOccurrence {
    let events = parse_events(raw, target_label);
    debug!(count = events.len(), "Parsed matching events");
    select_next(&events, now)
}
