//! Request and response types for the retrying fetcher.
//!
//! Both types are transient: a [`FetchRequest`] describes one GET, and a
//! [`FetchResponse`] holds the outcome of the last attempt made for it.
//! Nothing is cached or reused between calls.

use bytes::Bytes;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A GET request: target URL plus header overrides.
///
/// Headers set here replace the fetcher's defaults with the same name
/// (compared case-insensitively), including `X-Requested-With`.
///
/// # Examples
///
/// ```
/// use fetchkit::FetchRequest;
///
/// let request = FetchRequest::new("https://example.com/api/quote")
///     .with_header("Accept", "application/json")
///     .with_header("User-Agent", "fetchkit");
/// assert_eq!(request.headers.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchRequest {
    /// Absolute URL to fetch
    pub url: String,
    /// Header overrides, applied after the defaults
    pub headers: BTreeMap<String, String>,
}

impl FetchRequest {
    /// Create a request for `url` with no header overrides.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
        }
    }

    /// Set a header override.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set several header overrides at once.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

/// Outcome of the final attempt of a fetch.
///
/// The status is never checked by the fetcher beyond the retry decision, so a
/// 4xx, or a 5xx that outlived every retry, arrives here like any other
/// response.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers (names lowercased)
    pub headers: BTreeMap<String, String>,
    /// Complete response body
    pub body: Bytes,
    /// Number of attempts made, including the one that produced this response
    pub attempts: u32,
}

impl FetchResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Look up a response header by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = FetchRequest::new("http://localhost/x")
            .with_header("A", "1")
            .with_headers([("B", "2"), ("A", "3")]);
        assert_eq!(request.url, "http://localhost/x");
        assert_eq!(request.headers.get("A").map(String::as_str), Some("3"));
        assert_eq!(request.headers.get("B").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_response_helpers() {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "text/plain".to_string());
        let response = FetchResponse {
            status: 404,
            headers,
            body: Bytes::from_static(b"not here"),
            attempts: 1,
        };
        assert!(!response.is_success());
        assert_eq!(response.text(), "not here");
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
    }
}
