//! Named defaults shared by the library and the CLI.

use std::time::Duration;

/// Event name that marks guest hours in a location's calendar.
pub const DEFAULT_TARGET_LABEL: &str = "Member Guest Hours";

/// IANA zone used when displaying times on the page.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Per-request timeout for fetching a single feed.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Placeholder replaced with the rendered location list.
pub const LOCATIONS_PLACEHOLDER: &str = "%locations_content%";

/// Placeholder replaced with the generation timestamp.
pub const LAST_UPDATED_PLACEHOLDER: &str = "%last_updated%";
