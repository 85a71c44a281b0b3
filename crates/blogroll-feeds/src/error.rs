//! Fetch errors.

use thiserror::Error;

/// Failure to obtain an export body over HTTP.
///
/// Note what is *not* here: a non-2xx status or an empty body is not an
/// error — whatever the endpoint returns is cached and served until the
/// refresh interval elapses. Only transport-level failures surface.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid export URL: {0}")]
    InvalidUrl(#[from] hyper::http::uri::InvalidUri),

    #[error("failed to build export request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("export request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("failed to read export response body: {0}")]
    Body(#[from] hyper::Error),
}
