//! Dynamically-typed values decoded from untyped payloads.
//!
//! [`DynamicValue`] is a closed sum type over the kinds a loosely-typed JSON
//! payload can carry. It is produced by decoding (see
//! [`Fetcher::fetch_json`](crate::client::Fetcher::fetch_json)) and consumed by
//! the [`coerce`] and [`path`] modules.
//!
//! # Module Organization
//!
//! ```text
//! value/
//! ├── mod    - DynamicValue, ValueKind, conversions
//! ├── coerce - to_int / to_int64 / to_float64 / to_string (+ checked forms)
//! └── path   - get_path / get_path_or_default
//! ```
//!
//! # Decoding
//!
//! | JSON | DynamicValue |
//! |------|--------------|
//! | integer within `i64` | [`Int64`](DynamicValue::Int64) |
//! | any other number | [`Float`](DynamicValue::Float) |
//! | string | [`String`](DynamicValue::String) |
//! | `true` / `false` | [`Bool`](DynamicValue::Bool) |
//! | `null` | [`Null`](DynamicValue::Null) |
//! | array | [`Seq`](DynamicValue::Seq) |
//! | object | [`Map`](DynamicValue::Map) |
//!
//! [`Int`](DynamicValue::Int) never comes out of JSON decoding; it exists for
//! values built in Rust code.
//!
//! # Examples
//!
//! ```
//! use fetchkit::value::{DynamicValue, ValueKind};
//!
//! let value: DynamicValue = serde_json::json!({"price": "2,300"}).into();
//! assert_eq!(value.kind(), ValueKind::Map);
//! assert_eq!(value.get("price"), Some(&DynamicValue::from("2,300")));
//! ```

pub mod coerce;
pub mod path;

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;

/// String-keyed mapping of dynamic values; the shape of a decoded JSON object.
pub type DynamicMap = BTreeMap<String, DynamicValue>;

/// A value of one of a small closed set of kinds.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DynamicValue {
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit float
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Boolean; no coercion accepts it
    Bool(bool),
    /// Explicit null
    #[default]
    Null,
    /// Nested string-keyed mapping
    Map(DynamicMap),
    /// Ordered sequence
    Seq(Vec<DynamicValue>),
}

/// The kind of a [`DynamicValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`DynamicValue::Int`]
    Int,
    /// [`DynamicValue::Int64`]
    Int64,
    /// [`DynamicValue::Float`]
    Float,
    /// [`DynamicValue::String`]
    String,
    /// [`DynamicValue::Bool`]
    Bool,
    /// [`DynamicValue::Null`]
    Null,
    /// [`DynamicValue::Map`]
    Map,
    /// [`DynamicValue::Seq`]
    Seq,
}

impl ValueKind {
    /// Lowercase name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Int64 => "int64",
            ValueKind::Float => "float64",
            ValueKind::String => "string",
            ValueKind::Bool => "bool",
            ValueKind::Null => "null",
            ValueKind::Map => "mapping",
            ValueKind::Seq => "sequence",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DynamicValue {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            DynamicValue::Int(_) => ValueKind::Int,
            DynamicValue::Int64(_) => ValueKind::Int64,
            DynamicValue::Float(_) => ValueKind::Float,
            DynamicValue::String(_) => ValueKind::String,
            DynamicValue::Bool(_) => ValueKind::Bool,
            DynamicValue::Null => ValueKind::Null,
            DynamicValue::Map(_) => ValueKind::Map,
            DynamicValue::Seq(_) => ValueKind::Seq,
        }
    }

    /// Returns `true` for [`DynamicValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, DynamicValue::Null)
    }

    /// Borrow the inner mapping, if this is a [`DynamicValue::Map`].
    pub fn as_map(&self) -> Option<&DynamicMap> {
        match self {
            DynamicValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Single-step lookup. `None` if this is not a mapping or the key is absent.
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Method form of [`path::get_path`].
    pub fn pointer<K: AsRef<str>>(&self, keys: &[K]) -> crate::Result<&DynamicValue> {
        path::get_path(self, keys)
    }
}

impl From<serde_json::Value> for DynamicValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => DynamicValue::Null,
            Value::Bool(b) => DynamicValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => DynamicValue::Int64(i),
                None => DynamicValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => DynamicValue::String(s),
            Value::Array(items) => {
                DynamicValue::Seq(items.into_iter().map(DynamicValue::from).collect())
            }
            Value::Object(fields) => DynamicValue::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, DynamicValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for DynamicValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(DynamicValue::from)
    }
}

impl From<i32> for DynamicValue {
    fn from(v: i32) -> Self {
        DynamicValue::Int(v)
    }
}

impl From<i64> for DynamicValue {
    fn from(v: i64) -> Self {
        DynamicValue::Int64(v)
    }
}

impl From<f64> for DynamicValue {
    fn from(v: f64) -> Self {
        DynamicValue::Float(v)
    }
}

impl From<bool> for DynamicValue {
    fn from(v: bool) -> Self {
        DynamicValue::Bool(v)
    }
}

impl From<&str> for DynamicValue {
    fn from(v: &str) -> Self {
        DynamicValue::String(v.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(v: String) -> Self {
        DynamicValue::String(v)
    }
}

impl<T: Into<DynamicValue>> From<Option<T>> for DynamicValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(DynamicValue::Null, Into::into)
    }
}

impl<T: Into<DynamicValue>> From<Vec<T>> for DynamicValue {
    fn from(items: Vec<T>) -> Self {
        DynamicValue::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<DynamicValue>> From<BTreeMap<String, T>> for DynamicValue {
    fn from(fields: BTreeMap<String, T>) -> Self {
        DynamicValue::Map(fields.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_numbers() {
        assert_eq!(DynamicValue::from(json!(42)), DynamicValue::Int64(42));
        assert_eq!(DynamicValue::from(json!(-7)), DynamicValue::Int64(-7));
        assert_eq!(DynamicValue::from(json!(99.4)), DynamicValue::Float(99.4));
        // beyond i64
        assert_eq!(
            DynamicValue::from(json!(u64::MAX)),
            DynamicValue::Float(u64::MAX as f64)
        );
    }

    #[test]
    fn test_json_nested() {
        let value = DynamicValue::from(json!({
            "a": {"b": [1, "two", null, true]},
        }));
        let inner = value.get("a").and_then(|a| a.get("b")).unwrap();
        assert_eq!(
            inner,
            &DynamicValue::Seq(vec![
                DynamicValue::Int64(1),
                DynamicValue::from("two"),
                DynamicValue::Null,
                DynamicValue::Bool(true),
            ])
        );
    }

    #[test]
    fn test_deserialize() {
        let value: DynamicValue = serde_json::from_str(r#"{"k": 1.5}"#).unwrap();
        assert_eq!(value.get("k"), Some(&DynamicValue::Float(1.5)));
        assert_eq!(value.kind(), ValueKind::Map);
    }

    #[test]
    fn test_option_conversion() {
        assert!(DynamicValue::from(None::<i32>).is_null());
        assert_eq!(DynamicValue::from(Some("x")), DynamicValue::from("x"));
    }

    #[test]
    fn test_get_on_non_map() {
        assert_eq!(DynamicValue::Int(1).get("a"), None);
        assert_eq!(DynamicValue::Null.as_map(), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ValueKind::Float.to_string(), "float64");
        assert_eq!(DynamicValue::Seq(vec![]).kind().as_str(), "sequence");
    }
}
