//! Error types for fetchkit.
//!
//! Every recoverable failure in the crate is a [`FetchKitError`]. The one
//! deliberate exception is a coercion contract violation (an unexpected
//! [`ValueKind`](crate::value::ValueKind) handed to one of the unchecked
//! `to_*` functions), which panics instead of returning an error.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidRequest`](FetchKitError::InvalidRequest) | request construction, before any I/O |
//! | [`Transport`](FetchKitError::Transport) | network failure after all attempts |
//! | [`Utf8`](FetchKitError::Utf8) | body reader on a non-UTF-8 body |
//! | [`Decode`](FetchKitError::Decode) | JSON fetcher on malformed JSON |
//! | [`Shape`](FetchKitError::Shape) | JSON fetcher on a non-object top level |
//! | [`KeyNotFound`](FetchKitError::KeyNotFound) | path lookup |
//! | [`Parse`](FetchKitError::Parse) / [`UnexpectedKind`](FetchKitError::UnexpectedKind) | checked coercion |

use crate::value::ValueKind;
use thiserror::Error;

/// Result type alias for fetchkit operations.
pub type Result<T> = std::result::Result<T, FetchKitError>;

/// Errors returned by fetchkit.
#[derive(Debug, Error)]
pub enum FetchKitError {
    /// The request could not be built (bad URL, header name or header value).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network, DNS, TLS or body read failure on the final attempt.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid UTF-8.
    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The response body is not valid JSON.
    #[error("failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response decoded to JSON, but the top-level value is not an object.
    #[error("expected a JSON object, got {kind}: {body}")]
    Shape {
        /// Kind of the decoded top-level value
        kind: ValueKind,
        /// Raw response body
        body: String,
    },

    /// A key along a path lookup is missing.
    #[error("key '{0}' not found")]
    KeyNotFound(String),

    /// A numeric string could not be parsed by a checked coercion.
    #[error("cannot parse {input:?} as {target}")]
    Parse {
        /// The string after thousands separators were removed
        input: String,
        /// Target type name
        target: &'static str,
    },

    /// A checked coercion received a kind it does not convert.
    #[error("cannot convert {kind} to {target}")]
    UnexpectedKind {
        /// Kind of the rejected value
        kind: ValueKind,
        /// Target type name
        target: &'static str,
    },
}

impl FetchKitError {
    /// Whether the failing operation may succeed if attempted again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchKitError::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_names_key() {
        let err = FetchKitError::KeyNotFound("bad_key".to_string());
        assert_eq!(err.to_string(), "key 'bad_key' not found");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_shape_message_embeds_body() {
        let err = FetchKitError::Shape {
            kind: ValueKind::Seq,
            body: "[1,2,3]".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("[1,2,3]"));
        assert!(msg.contains("sequence"));
    }
}
