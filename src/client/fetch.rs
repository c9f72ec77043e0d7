//! The retrying GET client.
//!
//! # Examples
//!
//! ## Simple GET request
//!
//! ```ignore
//! use fetchkit::Fetcher;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = Fetcher::new();
//!     let response = fetcher.get("http://example.com/api/data").await?;
//!     println!("Status: {} after {} attempt(s)", response.status, response.attempts);
//!     Ok(())
//! }
//! ```
//!
//! ## Decoding a JSON object
//!
//! ```ignore
//! use fetchkit::{FetchRequest, Fetcher};
//! use fetchkit::value::{coerce::to_float64, path::get_path, DynamicValue};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = Fetcher::new();
//!     let request = FetchRequest::new("http://example.com/api/quote")
//!         .with_header("Accept", "application/json");
//!
//!     let quote = DynamicValue::Map(fetcher.fetch_json(&request).await?);
//!     let last = to_float64(get_path(&quote, &["data", "lastSalePrice"])?);
//!     println!("Last: {}", last);
//!     Ok(())
//! }
//! ```

use crate::client::config::FetcherConfig;
use crate::client::utils;
use crate::error::{FetchKitError, Result};
use crate::types::{FetchRequest, FetchResponse};
use crate::value::{DynamicMap, DynamicValue};
use reqwest::header::HeaderMap;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

/// HTTP GET client with a fixed-delay retry policy.
///
/// Every request carries `X-Requested-With: XMLHttpRequest` unless the
/// caller overrides it. An attempt is retried when it fails at the transport
/// level or returns a status of 500 or above; anything else (including 4xx)
/// ends the loop at once. When attempts run out, the last outcome is
/// returned as is, so a persistent 503 comes back as an `Ok` response.
///
/// Cloning is cheap; clones share the connection pool and configuration.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    config: Arc<FetcherConfig>,
}

impl Fetcher {
    /// Create a fetcher with default configuration.
    pub fn new() -> Self {
        Self::with_config(FetcherConfig::default())
    }

    /// Create a fetcher with custom configuration.
    pub fn with_config(config: FetcherConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        let client = builder.build().unwrap_or_default();

        Fetcher {
            client,
            config: Arc::new(config),
        }
    }

    /// GET `url` with no header overrides.
    pub async fn get(&self, url: &str) -> Result<FetchResponse> {
        self.fetch(&FetchRequest::new(url)).await
    }

    /// GET with retries.
    ///
    /// Fails with [`FetchKitError::InvalidRequest`] before touching the
    /// network if the URL or a header cannot be used.
    pub async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse> {
        let url = utils::parse_url(&request.url)?;
        let headers = utils::build_headers(&request.headers)?;
        let max_attempts = self.config.max_attempts();

        let mut attempt = 1;
        loop {
            tracing::debug!("GET {} (attempt {}/{})", url, attempt, max_attempts);
            let outcome = self.fetch_once(url.clone(), headers.clone(), attempt).await;

            let retry = match &outcome {
                Ok(response) => utils::is_retryable_status(response.status),
                Err(e) => e.is_retryable(),
            };

            if !retry || attempt >= max_attempts {
                if let Ok(response) = &outcome {
                    tracing::debug!(
                        "GET {} -> {} after {} attempt(s)",
                        url,
                        response.status,
                        attempt
                    );
                }
                return outcome;
            }

            let delay = self.config.retry_delay();
            if self.config.enable_logging {
                match &outcome {
                    Ok(response) => tracing::warn!(
                        "Request to {} returned {} (attempt {}), retrying after {:?}",
                        url,
                        response.status,
                        attempt,
                        delay
                    ),
                    Err(e) => tracing::warn!(
                        "Request to {} failed (attempt {}), retrying after {:?}: {}",
                        url,
                        attempt,
                        delay,
                        e
                    ),
                }
            }

            sleep(delay).await;
            attempt += 1;
        }
    }

    /// Fetch and return the whole body as text.
    ///
    /// The status is not inspected: an error page comes back as its text.
    pub async fn read_body(&self, request: &FetchRequest) -> Result<String> {
        let response = self.fetch(request).await?;
        Ok(String::from_utf8(response.body.to_vec())?)
    }

    /// Fetch and decode a JSON object.
    ///
    /// Malformed JSON is [`FetchKitError::Decode`]. Valid JSON whose top
    /// level is not an object is [`FetchKitError::Shape`], carrying the raw
    /// body so the caller can see what the server sent instead.
    pub async fn fetch_json(&self, request: &FetchRequest) -> Result<DynamicMap> {
        let response = self.fetch(request).await?;
        decode_object(&response)
    }

    /// Get the fetcher configuration
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    async fn fetch_once(
        &self,
        url: Url,
        headers: HeaderMap,
        attempt: u32,
    ) -> Result<FetchResponse> {
        let response = self.client.get(url).headers(headers).send().await?;

        let status = response.status().as_u16();
        let headers = utils::headers_to_map(response.headers());
        let body = response.bytes().await?;

        Ok(FetchResponse {
            status,
            headers,
            body,
            attempts: attempt,
        })
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_object(response: &FetchResponse) -> Result<DynamicMap> {
    let value: serde_json::Value = serde_json::from_slice(&response.body)?;
    match DynamicValue::from(value) {
        DynamicValue::Map(map) => Ok(map),
        other => Err(FetchKitError::Shape {
            kind: other.kind(),
            body: response.text().into_owned(),
        }),
    }
}

/// GET `url` with header overrides, using a fresh default [`Fetcher`].
pub async fn fetch(url: &str, headers: &BTreeMap<String, String>) -> Result<FetchResponse> {
    Fetcher::new().fetch(&request_for(url, headers)).await
}

/// Fetch `url` and return its body as text, using a fresh default [`Fetcher`].
pub async fn read_body(url: &str, headers: &BTreeMap<String, String>) -> Result<String> {
    Fetcher::new().read_body(&request_for(url, headers)).await
}

/// Fetch `url` and decode a JSON object, using a fresh default [`Fetcher`].
pub async fn fetch_json(url: &str, headers: &BTreeMap<String, String>) -> Result<DynamicMap> {
    Fetcher::new().fetch_json(&request_for(url, headers)).await
}

fn request_for(url: &str, headers: &BTreeMap<String, String>) -> FetchRequest {
    FetchRequest {
        url: url.to_string(),
        headers: headers.clone(),
    }
}
