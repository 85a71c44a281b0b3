//! Configuration types for blogroll.
//!
//! [`Config::load`] reads `~/.config/blogroll/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//!
//! A [`FeedConfig`] can also be read straight out of a [`KvStore`] via
//! [`FeedConfig::from_store`], for embedders whose host environment owns the
//! settings.

use serde::Deserialize;
use std::path::PathBuf;

use crate::store::{keys, KvStore};

/// Seconds a cached export stays fresh when nothing else is configured.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 3600;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[feed]
username              = ""
base_folder           = ""
refresh_interval_secs = 3600

[export]
base_url = "http://www.bloglines.com"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/blogroll/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// `[feed]` section — who to fetch and how long to trust the cache.
/// Immutable per render call.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Account name at the remote service. Required before rendering.
    #[serde(default)]
    pub username: String,
    /// Restrict the export to one folder. Empty means the whole tree; an
    /// empty value is never sent as a query parameter.
    #[serde(default)]
    pub base_folder: String,
    /// Cache freshness threshold in seconds.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            base_folder: String::new(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl FeedConfig {
    /// Read the feed settings out of a key-value store, applying the same
    /// defaults as the config file: empty username/folder, one-hour refresh.
    /// The folder is trimmed; an unparsable interval falls back to the
    /// default.
    pub fn from_store(store: &dyn KvStore) -> Self {
        Self {
            username: store.get(keys::USERNAME).unwrap_or_default(),
            base_folder: store
                .get(keys::BASE_FOLDER)
                .unwrap_or_default()
                .trim()
                .to_string(),
            refresh_interval_secs: store
                .get(keys::REFRESH_INTERVAL)
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS),
        }
    }
}

/// `[export]` section — where the outline export lives.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Base URL of the export endpoint, without the `/export` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://www.bloglines.com".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/blogroll/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not
    /// exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("blogroll")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
