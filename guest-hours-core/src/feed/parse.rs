//! Line scanner over calendar feed text.
//!
//! Event blocks are delimited by `BEGIN:VEVENT` / `END:VEVENT` lines. Inside a
//! block the first usable `SUMMARY:` and `DTSTART:` lines are kept; a block is
//! turned into a [`CalendarEvent`] only when both were found and the summary
//! matches the requested label.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::event::CalendarEvent;

const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";
const SUMMARY_PREFIX: &str = "SUMMARY:";
const DTSTART_PREFIX: &str = "DTSTART:";

/// Length of a compact UTC date-time such as `20250603T200000Z`.
const COMPACT_UTC_LEN: usize = 16;

/// Parse raw feed text, keeping only events labelled `target_label`.
///
/// Malformed input never fails: blocks outside a matched begin/end pair and
/// blocks missing either field are dropped. The returned events are in feed
/// order, but callers should not rely on that.
pub fn parse_events(raw: &str, target_label: &str) -> Vec<CalendarEvent> {
    let mut events = Vec::new();
    let mut current: Option<BlockFields> = None;

    // Split on '\n' only, so a CRLF line keeps its '\r' for field scanning
    for raw_line in raw.split('\n') {
        let line = raw_line.trim_end();

        if line == END_EVENT {
            if let Some(fields) = current.take() {
                events.extend(fields.into_event(target_label));
            }
        } else if let Some(fields) = current.as_mut() {
            // A stray BEGIN inside an open block is just another line here
            fields.scan(raw_line);
        } else if line == BEGIN_EVENT {
            current = Some(BlockFields::default());
        }
    }

    events
}

/// Fields collected from a single event block.
#[derive(Debug, Default)]
struct BlockFields {
    summary: Option<String>,
    start: Option<DateTime<Utc>>,
}

impl BlockFields {
    /// `line` is untrimmed: a `SUMMARY:` followed only by whitespace or `\r`
    /// still claims the label slot, leaving an empty label.
    fn scan(&mut self, line: &str) {
        if self.summary.is_none()
            && let Some(value) = line.strip_prefix(SUMMARY_PREFIX)
            && !value.is_empty()
        {
            self.summary = Some(value.trim().to_string());
            return;
        }

        if self.start.is_none()
            && let Some(value) = line.strip_prefix(DTSTART_PREFIX)
        {
            self.start = parse_compact_utc(value);
        }
    }

    fn into_event(self, target_label: &str) -> Option<CalendarEvent> {
        let summary = self.summary?;
        let start = self.start?;

        (summary == target_label).then(|| CalendarEvent::new(summary, start))
    }
}

/// Parse the leading `YYYYMMDDTHHMMSSZ` of a DTSTART value as UTC.
///
/// Date-only values, floating times and impossible dates all yield `None`.
/// Anything after the 16-character value is ignored.
fn parse_compact_utc(value: &str) -> Option<DateTime<Utc>> {
    let compact = value.get(..COMPACT_UTC_LEN)?;
    if !is_compact_utc(compact.as_bytes()) {
        return None;
    }

    NaiveDateTime::parse_from_str(&compact[..COMPACT_UTC_LEN - 1], "%Y%m%dT%H%M%S")
        .ok()
        .map(|dt| dt.and_utc())
}

fn is_compact_utc(bytes: &[u8]) -> bool {
    bytes.len() == COMPACT_UTC_LEN
        && bytes[..8].iter().all(u8::is_ascii_digit)
        && bytes[8] == b'T'
        && bytes[9..15].iter().all(u8::is_ascii_digit)
        && bytes[15] == b'Z'
}
