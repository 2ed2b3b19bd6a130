//! HTML page rendering.
//!
//! The template is an opaque string with two placeholders. Rendering never
//! reorders the report; entries appear in the order the report holds them.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::constants::{DEFAULT_TARGET_LABEL, LAST_UPDATED_PLACEHOLDER, LOCATIONS_PLACEHOLDER};
use crate::error::{HoursError, HoursResult};
use crate::event::NextOccurrence;
use crate::report::{LocationEntry, LocationReport};

const DISPLAY_FORMAT: &str = "%A, %B %-d, %Y at %-I:%M %p";
const DISPLAY_FORMAT_FULL: &str = "%A, %B %-d, %Y at %-I:%M %p %Z";

/// Shown in the time slot for a location with nothing scheduled.
const NONE_FOUND_TEXT: &str = "N/A";

/// Settings that control how the page is rendered.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Zone all times are displayed in.
    pub timezone: Tz,
    /// Message shown when the report has no locations at all.
    pub empty_message: String,
}

impl RenderOptions {
    pub fn new(timezone: Tz, target_label: &str) -> Self {
        RenderOptions {
            timezone,
            empty_message: format!("No upcoming {target_label} events found."),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::new(chrono_tz::America::New_York, DEFAULT_TARGET_LABEL)
    }
}

/// An instant formatted for display: a readable form and a precise one with
/// the zone abbreviation, used as a tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTime {
    pub long: String,
    pub full: String,
}

impl DisplayTime {
    pub fn new(instant: DateTime<Utc>, timezone: Tz) -> Self {
        let local = instant.with_timezone(&timezone);
        DisplayTime {
            long: local.format(DISPLAY_FORMAT).to_string(),
            full: local.format(DISPLAY_FORMAT_FULL).to_string(),
        }
    }
}

/// Check that the template has both placeholders.
pub fn validate_template(template: &str) -> HoursResult<()> {
    let missing: Vec<_> = [LOCATIONS_PLACEHOLDER, LAST_UPDATED_PLACEHOLDER]
        .into_iter()
        .filter(|placeholder| !template.contains(placeholder))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(HoursError::Template(format!(
            "Template is missing placeholder(s): {}",
            missing.join(", ")
        )))
    }
}

/// Render the full page from a report and a template.
pub fn render_page(
    report: &LocationReport,
    generated_at: DateTime<Utc>,
    template: &str,
    options: &RenderOptions,
) -> HoursResult<String> {
    validate_template(template)?;

    let locations = render_locations(report, options);
    let last_updated = render_last_updated(generated_at, options);

    Ok(substitute(
        template,
        &[
            (LOCATIONS_PLACEHOLDER, locations.as_str()),
            (LAST_UPDATED_PLACEHOLDER, last_updated.as_str()),
        ],
    ))
}

/// Render the location list fragment, or the "no events" fragment when the
/// report is empty.
pub fn render_locations(report: &LocationReport, options: &RenderOptions) -> String {
    if report.is_empty() {
        return format!(
            "\n        <div class=\"no-events\">\n            {}\n        </div>",
            escape_html(&options.empty_message)
        );
    }

    report
        .iter()
        .map(|entry| render_location(entry, options))
        .collect()
}

fn render_location(entry: &LocationEntry, options: &RenderOptions) -> String {
    let time = match entry.next {
        NextOccurrence::Upcoming(instant) => {
            let display = DisplayTime::new(instant, options.timezone);
            format!(
                "<div class=\"event-time\" title=\"{}\">{}</div>",
                display.full, display.long
            )
        }
        NextOccurrence::NoneFound => {
            format!("<div class=\"event-time\">{NONE_FOUND_TEXT}</div>")
        }
    };

    format!(
        "\n        <div class=\"location\">\n            \
         <div class=\"location-name\">{}</div>\n            \
         {time}\n        \
         </div>",
        escape_html(&entry.location)
    )
}

fn render_last_updated(generated_at: DateTime<Utc>, options: &RenderOptions) -> String {
    let display = DisplayTime::new(generated_at, options.timezone);
    format!("<span title=\"{}\">{}</span>", display.full, display.long)
}

/// Replace every placeholder occurrence in a single pass, so substituted
/// text is never scanned for placeholders again.
fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    loop {
        let next = replacements
            .iter()
            .filter_map(|(placeholder, value)| {
                rest.find(placeholder).map(|pos| (pos, *placeholder, *value))
            })
            .min_by_key(|(pos, _, _)| *pos);

        match next {
            Some((pos, placeholder, value)) => {
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + placeholder.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
