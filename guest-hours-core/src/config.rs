//! Feeds configuration.
//!
//! The feeds file is a JSON object with a single `calendar_feeds` key mapping
//! location names to feed URLs:
//!
//! ```json
//! { "calendar_feeds": { "Berkeley": "https://example.com/berkeley.ics" } }
//! ```
//!
//! Locations are kept in file order.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{HoursError, HoursResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedsConfig {
    #[serde(rename = "calendar_feeds")]
    feeds: IndexMap<String, String>,
}

impl FeedsConfig {
    /// Load the feeds file from disk.
    pub fn load(path: &Path) -> HoursResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HoursError::Config(format!("Could not read feeds file {}: {e}", path.display()))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            HoursError::Config(format!("Invalid feeds file {}: {e}", path.display()))
        })
    }

    pub fn from_json(content: &str) -> HoursResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| HoursError::Config(format!("Invalid feeds file: {e}")))
    }

    /// (location, url) pairs in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.feeds.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }
}

impl<L: Into<String>, U: Into<String>> FromIterator<(L, U)> for FeedsConfig {
    fn from_iter<T: IntoIterator<Item = (L, U)>>(iter: T) -> Self {
        FeedsConfig {
            feeds: iter
                .into_iter()
                .map(|(location, url)| (location.into(), url.into()))
                .collect(),
        }
    }
}
