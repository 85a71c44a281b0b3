//! blogroll-core — outline parsing, template rendering, and shared types.
//!
//! This crate holds everything that needs no IO: the outline (OPML-style)
//! event parser, the template substitution engine, the configuration types,
//! and the key-value store seam the fetch side builds on.
//!
//! # Architecture
//!
//! ```text
//! KvStore ──► CacheStore ──► FeedFetcher ──► parse_events ──► format_events
//!   (here)    (blogroll-feeds)                 (here)            (here)
//! ```
//!
//! The fetch side lives in `blogroll-feeds`; the render entry point and CLI
//! live in the root `blogroll` crate.

pub mod config;
pub mod error;
pub mod format;
pub mod outline;
pub mod store;
pub mod template;

pub use config::{Config, ExportConfig, FeedConfig};
pub use error::ParseError;
pub use format::{format_events, render_outline};
pub use outline::{
    parse_events, parse_tree, OutlineAttrs, OutlineEvent, OutlineNode, SUBSCRIPTIONS_DEPTH,
    SUBSCRIPTIONS_TITLE,
};
pub use store::{keys, JsonFileStore, KvStore, MemoryStore};
pub use template::{RenderFormat, TemplateSet};
