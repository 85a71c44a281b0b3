//! blogroll — fetch a remote feed-subscription export and render it as markup.
//!
//! The pipeline is three small pieces wired together here:
//!
//! ```text
//! KvStore ──► CacheStore ──► FeedFetcher ──► parse_events ──► format_events
//! ```
//!
//! [`Blogroll`] is the render entry point: it checks configuration, lets the
//! fetcher decide between cache and network, and hands the raw outline text
//! to the formatter with the selected [`RenderFormat`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use blogroll::{
//!     Blogroll, CacheStore, FeedConfig, FeedFetcher, HyperClient, MemoryStore, RenderFormat,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::new());
//! let fetcher = FeedFetcher::new(
//!     CacheStore::new(store),
//!     HyperClient::new(),
//!     "http://www.bloglines.com",
//! );
//! let config = FeedConfig {
//!     username: "alice".to_string(),
//!     ..FeedConfig::default()
//! };
//!
//! let markup = Blogroll::new(config, fetcher)
//!     .render(RenderFormat::UnorderedList)
//!     .await?;
//! println!("{markup}");
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

pub use blogroll_core::{
    config::{Config, ExportConfig, FeedConfig, DEFAULT_REFRESH_INTERVAL_SECS},
    error::ParseError,
    format::{format_events, render_outline},
    outline::{
        parse_events, parse_tree, OutlineAttrs, OutlineEvent, OutlineNode, SUBSCRIPTIONS_DEPTH,
        SUBSCRIPTIONS_TITLE,
    },
    store::{keys, JsonFileStore, KvStore, MemoryStore},
    template::{RenderFormat, TemplateSet},
};
pub use blogroll_feeds::{
    cache::CacheStore,
    error::FetchError,
    fetcher::{export_url, FeedFetcher},
    http::{HttpClient, HttpResponse, HyperClient},
};

/// Why a render call failed.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No username configured — no meaningful output is possible, so the
    /// render aborts before any IO.
    #[error("username is not configured; set it before rendering")]
    MissingUsername,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The render entry point: configuration plus a fetcher.
pub struct Blogroll<C> {
    config: FeedConfig,
    fetcher: FeedFetcher<C>,
}

impl<C: HttpClient> Blogroll<C> {
    pub fn new(config: FeedConfig, fetcher: FeedFetcher<C>) -> Self {
        Self { config, fetcher }
    }

    /// The fetcher (and through it the cache) this instance renders from.
    pub fn fetcher(&self) -> &FeedFetcher<C> {
        &self.fetcher
    }

    /// Fetch (cached or fresh) and render the subscription list.
    ///
    /// Fetch and parse failures come back as distinguishable
    /// [`RenderError`] variants; a parse failure does not disturb the
    /// cache, which by then already holds the raw body.
    pub async fn render(&self, format: RenderFormat) -> Result<String, RenderError> {
        if self.config.username.trim().is_empty() {
            return Err(RenderError::MissingUsername);
        }

        let raw = self.fetcher.fetch(&self.config).await?;
        let templates = format.templates();
        Ok(render_outline(&raw, &templates)?)
    }
}
