//! Calendar feed handling.
//!
//! Only the handful of fields needed to find one named event type are read;
//! everything else in the feed is skipped.

mod parse;

pub use parse::parse_events;
