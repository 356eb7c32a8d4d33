//! Network boundary for remote collections.

use std::future::Future;
use std::marker::PhantomData;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::config::ApiConfig;

use super::state::Record;

/// Errors produced while fetching a collection.
///
/// These never reach the caller of a controller; they settle the resource
/// as failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Failed to connect or send
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status
    #[error("Request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// Body is not the expected JSON array
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to '{url}' timed out after {duration}s")]
    Timeout { url: String, duration: u64 },

    /// No transport could serve the request
    #[error("Resource unavailable: {0}")]
    Unavailable(String),
}

/// Source of a remote collection.
pub trait Fetcher<T>: Send + Sync + 'static {
    /// Issue one request and wait for it to settle.
    fn fetch(&self) -> impl Future<Output = Result<Vec<T>, FetchError>> + Send;
}

/// Fetches a JSON array of `T` with a GET request.
pub struct HttpFetcher<T> {
    client: Client,
    url: String,
    timeout: Duration,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpFetcher<T> {
    /// Build a fetcher for `path` under the configured base URL.
    pub fn new(api: &ApiConfig, path: &str) -> Result<Self, FetchError> {
        let url = format!("{}{}", api.base_url.trim_end_matches('/'), path);
        let timeout = Duration::from_secs(u64::from(api.timeout_seconds));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(api.connect_timeout_seconds)))
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            url,
            timeout,
            _item: PhantomData,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<T: Record> Fetcher<T> for HttpFetcher<T> {
    async fn fetch(&self) -> Result<Vec<T>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| self.classify(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|source| match self.classify(source) {
                FetchError::Request { url, source } => FetchError::Decode { url, source },
                other => other,
            })
    }
}

impl<T> HttpFetcher<T> {
    fn classify(&self, source: reqwest::Error) -> FetchError {
        if source.is_timeout() {
            FetchError::Timeout {
                url: self.url.clone(),
                duration: self.timeout.as_secs(),
            }
        } else {
            FetchError::Request {
                url: self.url.clone(),
                source,
            }
        }
    }
}
