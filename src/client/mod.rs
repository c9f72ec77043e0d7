//! Retrying HTTP GET client.
//!
//! This module fetches remote resources and hands back either the raw
//! response, its body as text, or its body decoded as a JSON object:
//!
//! - **Retry** transport failures and 5xx responses, up to four attempts with
//!   a fixed 500 ms pause
//! - **Tag** every request with `X-Requested-With: XMLHttpRequest`, which
//!   caller headers may override
//! - **Validate** that a decoded JSON payload is an object
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch  - Fetcher and the one-shot fetch / read_body / fetch_json functions
//! ├── config - FetcherConfig
//! └── utils  - header building, URL validation, status classification
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Fetcher`] | Retrying GET client |
//! | [`FetcherConfig`] | Retry count, delay, timeout, logging |
//!
//! # Examples
//!
//! ## Creating a Fetcher
//!
//! ```
//! use fetchkit::client::{Fetcher, FetcherConfig};
//!
//! // Default configuration
//! let fetcher = Fetcher::new();
//!
//! // Custom configuration
//! let config = FetcherConfig {
//!     max_retries: 5,
//!     retry_delay_ms: 100,
//!     ..Default::default()
//! };
//! let fetcher = Fetcher::with_config(config);
//! assert_eq!(fetcher.config().max_attempts(), 6);
//! ```
//!
//! ## Utility Functions
//!
//! ```
//! use fetchkit::client::{build_headers, is_retryable_status};
//! use std::collections::BTreeMap;
//!
//! assert!(is_retryable_status(503));
//! assert!(!is_retryable_status(404));
//!
//! let headers = build_headers(&BTreeMap::new()).unwrap();
//! assert_eq!(headers.get("x-requested-with").unwrap(), "XMLHttpRequest");
//! ```

mod config;
mod fetch;
mod utils;

pub use config::FetcherConfig;
pub use fetch::{fetch, fetch_json, read_body, Fetcher};
pub use utils::*;
