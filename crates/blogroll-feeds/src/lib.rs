//! blogroll-feeds — the fetch side of blogroll.
//!
//! [`CacheStore`] wraps the key-value seam with an aged cache slot,
//! [`HttpClient`] is the transport seam with a production
//! [`HyperClient`], and [`FeedFetcher`] makes the cache-or-network
//! decision and writes fetched exports through.

pub mod cache;
pub mod error;
pub mod fetcher;
pub mod http;

pub use cache::CacheStore;
pub use error::FetchError;
pub use fetcher::{export_url, FeedFetcher};
pub use http::{HttpClient, HttpResponse, HyperClient};
