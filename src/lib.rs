#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # fetchkit: fetch loosely-typed JSON and pin it down
//!
//! A small helper library for callers that pull data over HTTP and then have
//! to make sense of loosely-typed values: numbers that arrive as strings with
//! thousands separators, integers and floats mixed freely, and nulls where a
//! value was expected.
//!
//! ## Overview
//!
//! The crate has three independent parts:
//!
//! 1. **Retrying GET** - [`Fetcher`] retries transport failures and 5xx
//!    responses with a fixed delay and returns the last outcome
//! 2. **Value coercion** - [`value::coerce`] turns a [`DynamicValue`] into an
//!    `i32`, `i64`, `f64` or `String`, stripping `,` separators from numeric
//!    strings
//! 3. **Path lookup** - [`value::path`] walks nested mappings by a sequence of
//!    keys
//!
//! ## Usage
//!
//! ```ignore
//! use fetchkit::value::{coerce, path, DynamicValue};
//! use std::collections::BTreeMap;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut headers = BTreeMap::new();
//!     headers.insert("Accept".to_string(), "application/json".to_string());
//!
//!     let body = DynamicValue::Map(fetchkit::fetch_json("https://example.com/api/quote", &headers).await?);
//!
//!     let volume = coerce::to_int64(path::get_path(&body, &["data", "volume"])?);
//!     println!("Volume: {}", volume);
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Recoverable failures are returned as [`FetchKitError`]. Passing a value of
//! an unsupported kind to one of the unchecked coercions is a programming
//! error and panics; use the `try_to_*` forms when the kind is not known in
//! advance.
//!
//! ## Logging
//!
//! Events are emitted through [`tracing`]: `warn` for every retry, `debug`
//! for each attempt, `error` just before a coercion panic. Installing a
//! subscriber is left to the application.
//!
//! ## Module Structure
//!
//! - **[client]** - Retrying GET client and configuration
//! - **[value]** - Dynamic values, coercion and path lookup
//! - **[types]** - Request and response types
//! - **[error]** - Error types and result handling

pub mod client;
pub mod error;
pub mod types;
pub mod value;

pub use client::{fetch, fetch_json, read_body, Fetcher, FetcherConfig};
pub use error::{FetchKitError, Result};
pub use types::{FetchRequest, FetchResponse};
pub use value::{DynamicMap, DynamicValue, ValueKind};
