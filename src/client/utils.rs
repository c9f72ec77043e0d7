//! Helpers for building requests and classifying responses.

use crate::error::{FetchKitError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::BTreeMap;
use url::Url;

/// Header sent with every request unless overridden.
pub const X_REQUESTED_WITH: &str = "x-requested-with";

/// Default value of [`X_REQUESTED_WITH`].
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Check if a response status should be retried.
///
/// Only server errors are retried; 4xx is the caller's problem.
pub fn is_retryable_status(status: u16) -> bool {
    status >= 500
}

/// Parse and validate a request URL.
pub fn parse_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| FetchKitError::InvalidRequest(format!("invalid URL {:?}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchKitError::InvalidRequest(format!(
            "unsupported URL scheme {:?} in {:?}",
            other, raw
        ))),
    }
}

/// Build the outgoing header map.
///
/// `X-Requested-With: XMLHttpRequest` goes in first; `overrides` are applied
/// on top and replace any default with the same (case-insensitive) name.
pub fn build_headers(overrides: &BTreeMap<String, String>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(X_REQUESTED_WITH),
        HeaderValue::from_static(XML_HTTP_REQUEST),
    );

    for (name, value) in overrides {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| FetchKitError::InvalidRequest(format!("invalid header name {:?}", name)))?;
        let value = HeaderValue::from_str(value).map_err(|_| {
            FetchKitError::InvalidRequest(format!("invalid value for header {}", name))
        })?;
        headers.insert(name, value);
    }

    Ok(headers)
}

/// Flatten response headers, keeping only values that are valid strings.
pub fn headers_to_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for (k, v) in headers {
        if let Ok(val) = v.to_str() {
            map.insert(k.as_str().to_string(), val.to_string());
        }
    }
    map
}
