//! Key-value store seam — the host environment's option storage.
//!
//! The fetch side never talks to a concrete store type; everything goes
//! through [`KvStore`] so embedders can back it with whatever their host
//! provides. Two implementations ship here: [`MemoryStore`] for tests and
//! embedding, and [`JsonFileStore`] for the CLI.
//!
//! Single-writer assumption: the host serialises renders per process, so no
//! contract is made for concurrent writers beyond the in-process mutex.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// String-keyed option storage.
pub trait KvStore: Send + Sync {
    /// Read a value, `None` when the key has never been set.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value, overwriting any previous one.
    fn set(&self, key: &str, value: &str);
    /// Delete a key. Deleting an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// The keys this system stores.
pub mod keys {
    pub const USERNAME: &str = "username";
    pub const BASE_FOLDER: &str = "baseFolder";
    pub const REFRESH_INTERVAL: &str = "refreshIntervalSeconds";
    pub const CACHE_BODY: &str = "cacheBody";
    pub const CACHE_WRITTEN_AT: &str = "cacheWrittenAt";
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory [`KvStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.lock().expect("store mutex poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.map.lock().expect("store mutex poisoned").remove(key);
    }
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

/// [`KvStore`] persisted as a flat JSON object at a caller-given path.
///
/// The whole file is rewritten on every `set`/`remove`. A persist failure is
/// logged and the in-memory view keeps the new value; the next successful
/// write flushes everything.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    map: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating parent directories. A missing file
    /// is an empty store; a corrupt one is an error.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let map = if path.exists() {
            serde_json::from_str(&std::fs::read_to_string(&path)?)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            map: Mutex::new(map),
        })
    }

    fn persist(&self, map: &HashMap<String, String>) {
        let json = serde_json::to_string_pretty(map).expect("string map serialises");
        if let Err(err) = std::fs::write(&self.path, json) {
            tracing::warn!(path = %self.path.display(), %err, "failed to persist option store");
        }
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.lock().expect("store mutex poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut map = self.map.lock().expect("store mutex poisoned");
        map.insert(key.to_string(), value.to_string());
        self.persist(&map);
    }

    fn remove(&self, key: &str) {
        let mut map = self.map.lock().expect("store mutex poisoned");
        map.remove(key);
        self.persist(&map);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
