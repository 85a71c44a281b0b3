//! Test builders — ergonomic constructors for configs, template sets, and a
//! recording HTTP client.
//!
//! These are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning
//! `Result`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use blogroll::{FeedConfig, FetchError, HttpClient, HttpResponse, TemplateSet};

// ---------------------------------------------------------------------------
// FeedConfig builder
// ---------------------------------------------------------------------------

/// Fluent builder for [`FeedConfig`] test fixtures.
///
/// # Example
///
/// ```rust
/// let config = FeedConfigBuilder::new("alice")
///     .folder("Tech")
///     .refresh_secs(120)
///     .build();
/// ```
pub struct FeedConfigBuilder {
    username: String,
    base_folder: String,
    refresh_interval_secs: u64,
}

impl FeedConfigBuilder {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            base_folder: String::new(),
            refresh_interval_secs: 3600,
        }
    }

    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.base_folder = folder.into();
        self
    }

    pub fn refresh_secs(mut self, secs: u64) -> Self {
        self.refresh_interval_secs = secs;
        self
    }

    pub fn build(self) -> FeedConfig {
        FeedConfig {
            username: self.username,
            base_folder: self.base_folder,
            refresh_interval_secs: self.refresh_interval_secs,
        }
    }
}

// ---------------------------------------------------------------------------
// Template sets
// ---------------------------------------------------------------------------

/// Template set that renders each emission as a short marker token, making
/// event order visible in assertions: `[L`/`L]` list, `[G:…`/`G]` group,
/// `[I:…]` item.
pub fn marker_templates() -> TemplateSet {
    TemplateSet {
        begin_list: "[L".to_string(),
        end_list: "L]".to_string(),
        begin_group: "[G:{title}".to_string(),
        end_group: "G]".to_string(),
        begin_item: "[I:{title}".to_string(),
        end_item: "]".to_string(),
    }
}

// ---------------------------------------------------------------------------
// RecordingClient
// ---------------------------------------------------------------------------

/// [`HttpClient`] fake that records every requested URL and replays a canned
/// response (or a transport error). Clone it before handing it to a fetcher
/// to keep a handle for assertions.
#[derive(Clone)]
pub struct RecordingClient {
    response: Arc<Mutex<HttpResponse>>,
    requests: Arc<Mutex<Vec<String>>>,
    fail: Arc<AtomicBool>,
}

impl RecordingClient {
    /// Replays a 200 response with the given body.
    pub fn returning(body: &str) -> Self {
        Self::with_status(200, body)
    }

    /// Replays an arbitrary status and body.
    pub fn with_status(status: u16, body: &str) -> Self {
        Self {
            response: Arc::new(Mutex::new(HttpResponse {
                status,
                body: body.to_string(),
            })),
            requests: Arc::new(Mutex::new(Vec::new())),
            fail: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Fails every request at the transport level.
    pub fn failing() -> Self {
        let client = Self::returning("");
        client.fail.store(true, Ordering::SeqCst);
        client
    }

    /// Number of GETs issued so far.
    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every URL requested, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for RecordingClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        if self.fail.load(Ordering::SeqCst) {
            return Err(transport_error());
        }
        Ok(self.response.lock().unwrap().clone())
    }
}

/// A real [`FetchError`] for fakes to return; fabricated from an
/// unparseable URL because transport errors cannot be constructed directly.
pub fn transport_error() -> FetchError {
    FetchError::InvalidUrl(
        "http://["
            .parse::<hyper::Uri>()
            .expect_err("URL with a bare bracket must not parse"),
    )
}
