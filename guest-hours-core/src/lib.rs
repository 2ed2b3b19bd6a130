//! Core library for guest-hours.
//!
//! This crate turns a set of location calendar feeds into a static status page:
//! - `feed` extracts labelled events from raw feed text
//! - `select` picks each location's next occurrence
//! - `aggregate` runs both across every configured location
//! - `render` fills the page template from the ordered report

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod feed;
pub mod fetch;
pub mod output;
pub mod render;
pub mod report;
pub mod select;

pub use aggregate::{AggregateOutcome, FetchFailure, aggregate};
pub use config::FeedsConfig;
pub use error::{HoursError, HoursResult};
pub use event::{CalendarEvent, NextOccurrence};
pub use feed::parse_events;
pub use fetch::{FeedFetcher, HttpFetcher};
pub use render::{RenderOptions, render_page};
pub use report::{LocationEntry, LocationReport};
pub use select::select_next;
