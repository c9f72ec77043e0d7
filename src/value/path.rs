//! Key-path lookup through nested mappings.
//!
//! A key path is an ordered slice of string keys. Lookup treats the root and
//! every intermediate value as a [`DynamicValue::Map`] and descends one key at
//! a time. Sequences are not indexed.
//!
//! # Examples
//!
//! ```
//! use fetchkit::value::DynamicValue;
//! use fetchkit::value::path::{get_path, get_path_or_default};
//!
//! let root: DynamicValue = serde_json::json!({
//!     "quote": {"last": "1,024.5", "volume": null}
//! }).into();
//!
//! let last = get_path(&root, &["quote", "last"]).unwrap();
//! assert_eq!(last, &DynamicValue::from("1,024.5"));
//!
//! let fallback = DynamicValue::Int(0);
//! let volume = get_path_or_default(&root, &["quote", "volume"], &fallback).unwrap();
//! assert_eq!(volume, &fallback);
//!
//! let err = get_path(&root, &["quote", "bid"]).unwrap_err();
//! assert_eq!(err.to_string(), "key 'bid' not found");
//! ```

use super::DynamicValue;
use crate::error::{FetchKitError, Result};

/// Walk `root` by `keys`, returning the value found at the end of the path.
///
/// An empty path returns `root` itself, whatever its kind. If an intermediate
/// value is not a mapping, or a key is absent, the error names only the key
/// that failed.
pub fn get_path<'a, K: AsRef<str>>(
    root: &'a DynamicValue,
    keys: &[K],
) -> Result<&'a DynamicValue> {
    keys.iter().try_fold(root, |current, key| {
        let key = key.as_ref();
        current
            .get(key)
            .ok_or_else(|| FetchKitError::KeyNotFound(key.to_string()))
    })
}

/// Like [`get_path`], but a found `Null` is replaced by `default`.
///
/// A missing key is still an error; `default` only stands in for an explicit
/// null.
pub fn get_path_or_default<'a, K: AsRef<str>>(
    root: &'a DynamicValue,
    keys: &[K],
    default: &'a DynamicValue,
) -> Result<&'a DynamicValue> {
    let value = get_path(root, keys)?;
    Ok(if value.is_null() { default } else { value })
}
