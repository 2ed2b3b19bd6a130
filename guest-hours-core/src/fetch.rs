//! Feed fetching.
//!
//! [`FeedFetcher`] is the seam between the aggregator and the network, so the
//! aggregator can be driven by an in-memory source in tests. [`HttpFetcher`]
//! is the real implementation.

use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;

use crate::error::{HoursError, HoursResult};

/// Something that can turn a feed URL into raw feed text.
pub trait FeedFetcher {
    /// Fetch the feed body. Network errors, timeouts and non-2xx responses
    /// are all reported as [`HoursError::Fetch`].
    fn fetch(&self, url: &str) -> impl Future<Output = HoursResult<String>> + Send;
}

/// Fetches feeds over HTTP(S), one attempt per call.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> HoursResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("guest-hours/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HoursError::Config(format!("Could not build HTTP client: {e}")))?;

        Ok(HttpFetcher { client, timeout })
    }

    async fn fetch_inner(&self, url: &str) -> HoursResult<String> {
        let response = self
            .client
            .get(normalize_feed_url(url))
            .send()
            .await
            .map_err(|e| HoursError::fetch(url, e))?;

        let response = response
            .error_for_status()
            .map_err(|e| HoursError::fetch(url, e))?;

        response.text().await.map_err(|e| HoursError::fetch(url, e))
    }
}

impl FeedFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> HoursResult<String> {
        timeout(self.timeout, self.fetch_inner(url))
            .await
            .map_err(|_| {
                HoursError::fetch(
                    url,
                    format!("request timed out after {:?}", self.timeout),
                )
            })?
    }
}

/// Calendar apps often publish `webcal://` links, which are plain HTTPS.
pub fn normalize_feed_url(url: &str) -> String {
    match url.strip_prefix("webcal://") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}
