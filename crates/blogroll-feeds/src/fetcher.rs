//! The cache-or-network decision and write-through.
//!
//! Faithful to the host-plugin lineage of this code, a fetch result is
//! cached no matter what came back: an empty body or an error page
//! overwrites a good cache and is served until the interval elapses. The
//! anomalous cases are logged at `warn`; DESIGN.md records the decision to
//! keep the behavior.

use blogroll_core::config::FeedConfig;

use crate::cache::CacheStore;
use crate::error::FetchError;
use crate::http::HttpClient;

/// Fetches the outline export, consulting the cache first.
pub struct FeedFetcher<C> {
    cache: CacheStore,
    client: C,
    base_url: String,
}

impl<C: HttpClient> FeedFetcher<C> {
    /// `base_url` is the export endpoint's origin, without the `/export`
    /// path (e.g. `http://www.bloglines.com`).
    pub fn new(cache: CacheStore, client: C, base_url: impl Into<String>) -> Self {
        Self {
            cache,
            client,
            base_url: base_url.into(),
        }
    }

    /// The cache this fetcher reads and writes.
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Return the raw outline text for `config`, from cache when fresh,
    /// from the network otherwise.
    pub async fn fetch(&self, config: &FeedConfig) -> Result<String, FetchError> {
        let age = self.cache.age();
        if !is_stale(age, config.refresh_interval_secs) {
            tracing::debug!(age = age.unwrap_or_default(), "serving export from cache");
            return Ok(self.cache.read());
        }

        let url = export_url(&self.base_url, &config.username, &config.base_folder);
        tracing::debug!(?age, %url, "cache stale or absent, fetching export");

        let response = match self.client.get(&url).await {
            Ok(response) => response,
            Err(err) => {
                // The slot always reflects the last attempt, failed or not.
                self.cache.write("");
                return Err(err);
            }
        };

        if !(200..300).contains(&response.status) {
            tracing::warn!(
                status = response.status,
                "export endpoint returned a non-success status; caching the body anyway"
            );
        } else if response.body.is_empty() {
            tracing::warn!("export endpoint returned an empty body; caching it anyway");
        }

        self.cache.write(&response.body);
        Ok(response.body)
    }
}

/// The staleness rule: refresh when nothing is cached or when the entry is
/// strictly older than the interval. An entry exactly `interval` seconds
/// old is still fresh.
pub fn is_stale(age: Option<i64>, refresh_interval_secs: u64) -> bool {
    match age {
        None => true,
        Some(age) => age > refresh_interval_secs as i64,
    }
}

/// Build the export URL. The `folder` parameter is appended only when
/// non-empty — the remote service returns empty results for a blank folder
/// parameter, so one must never be sent.
pub fn export_url(base_url: &str, username: &str, folder: &str) -> String {
    let mut url = format!(
        "{}/export?id={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(username)
    );
    if !folder.is_empty() {
        url.push_str("&folder=");
        url.push_str(&urlencoding::encode(folder));
    }
    url
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
