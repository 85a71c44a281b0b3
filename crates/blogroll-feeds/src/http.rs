//! HTTP transport seam.
//!
//! The fetcher is generic over [`HttpClient`] so tests can substitute fakes
//! and embedders can bring their own transport. The client is chosen once
//! at construction time; there is no runtime strategy switching.

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::{Method, Request, Uri};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::error::FetchError;

/// What a GET produced: the status code and the body decoded as text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Minimal GET-only HTTP client.
pub trait HttpClient: Send + Sync {
    /// Fetch `url` and return the response body as text. No headers, no
    /// auth, no redirect handling.
    fn get(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<HttpResponse, FetchError>> + Send;
}

/// Production [`HttpClient`] over the hyper connection pool.
pub struct HyperClient {
    client: Client<HttpConnector, Empty<Bytes>>,
}

impl HyperClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder(TokioExecutor::new()).build_http(),
        }
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for HyperClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let uri: Uri = url.parse()?;
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Empty::<Bytes>::new())?;

        let response = self.client.request(request).await?;
        let status = response.status().as_u16();
        let bytes = response.into_body().collect().await?.to_bytes();

        Ok(HttpResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
