//! The cache slot — one export body plus its write timestamp.
//!
//! Both values live in the host's key-value store under
//! [`keys::CACHE_BODY`] and [`keys::CACHE_WRITTEN_AT`] and are always
//! written together. The stamp goes last, so a write torn between the two
//! keys reads as stale rather than as fresh-but-wrong.

use std::sync::Arc;

use blogroll_core::store::{keys, KvStore};

/// Aged single-slot cache over a [`KvStore`].
#[derive(Clone)]
pub struct CacheStore {
    store: Arc<dyn KvStore>,
}

impl CacheStore {
    /// Wrap the given store. The store is shared, not owned: config readers
    /// and the cache can sit on the same backing object.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Seconds since the last write, or `None` when no entry exists (or the
    /// stamp is unreadable, which is treated the same way).
    pub fn age(&self) -> Option<i64> {
        let written: i64 = self.store.get(keys::CACHE_WRITTEN_AT)?.parse().ok()?;
        Some(chrono::Utc::now().timestamp() - written)
    }

    /// Store `body` and stamp the current time. Full overwrite, no merge.
    pub fn write(&self, body: &str) {
        self.store.set(keys::CACHE_BODY, body);
        self.store.set(
            keys::CACHE_WRITTEN_AT,
            &chrono::Utc::now().timestamp().to_string(),
        );
    }

    /// The last stored body, empty if none.
    pub fn read(&self) -> String {
        self.store.get(keys::CACHE_BODY).unwrap_or_default()
    }

    /// Drop the entry entirely; the next [`age`](Self::age) reports `None`.
    pub fn clear(&self) {
        self.store.remove(keys::CACHE_BODY);
        self.store.remove(keys::CACHE_WRITTEN_AT);
    }
}
