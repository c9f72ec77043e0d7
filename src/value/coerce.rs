//! Coercion of [`DynamicValue`]s into concrete Rust types.
//!
//! Each function accepts a fixed set of kinds:
//!
//! | function | Int | Int64 | String | Float | Null |
//! |----------|-----|-------|--------|-------|------|
//! | [`to_int`] | identity | truncating cast | parse | truncating cast | - |
//! | [`to_int64`] | widening cast | identity | parse | truncating cast | - |
//! | [`to_float64`] | cast | cast | parse | identity | - |
//! | [`to_string`] | decimal | decimal | identity | shortest decimal | `""` |
//!
//! Numeric strings have every `,` removed before parsing, so `"2,300,999"`
//! reads as `2300999`. A string that still fails to parse yields zero; an
//! integer string outside the target range saturates to the type's bounds.
//!
//! Any other kind is a contract violation: the caller was supposed to know
//! the value's kind already. The unchecked functions log the offending value
//! at `error` level and panic. The `try_*` forms return
//! [`FetchKitError::UnexpectedKind`] instead, and report unparseable strings
//! as [`FetchKitError::Parse`] rather than zero.
//!
//! # Examples
//!
//! ```
//! use fetchkit::value::DynamicValue;
//! use fetchkit::value::coerce::{to_float64, to_int, to_string};
//!
//! assert_eq!(to_int(&DynamicValue::from("2,300,999")), 2300999);
//! assert_eq!(to_int(&DynamicValue::from(99.4)), 99);
//! assert_eq!(to_float64(&DynamicValue::from("2,000,300.123")), 2000300.123);
//! assert_eq!(to_string(&DynamicValue::Null), "");
//! ```

use super::DynamicValue;
use crate::error::{FetchKitError, Result};
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

/// Convert to an `i32`, panicking on an unrecognized kind.
pub fn to_int(value: &DynamicValue) -> i32 {
    match value {
        DynamicValue::Int(v) => *v,
        DynamicValue::Int64(v) => *v as i32,
        DynamicValue::String(s) => parse_integer_lenient(s, i32::MIN, i32::MAX),
        DynamicValue::Float(v) => *v as i32,
        other => contract_violation(other, "int"),
    }
}

/// Convert to an `i64`, panicking on an unrecognized kind.
pub fn to_int64(value: &DynamicValue) -> i64 {
    match value {
        DynamicValue::Int(v) => i64::from(*v),
        DynamicValue::Int64(v) => *v,
        DynamicValue::String(s) => parse_integer_lenient(s, i64::MIN, i64::MAX),
        DynamicValue::Float(v) => *v as i64,
        other => contract_violation(other, "int64"),
    }
}

/// Convert to an `f64`, panicking on an unrecognized kind.
pub fn to_float64(value: &DynamicValue) -> f64 {
    match value {
        DynamicValue::Int(v) => f64::from(*v),
        DynamicValue::Int64(v) => *v as f64,
        DynamicValue::String(s) => strip_separators(s).parse().unwrap_or(0.0),
        DynamicValue::Float(v) => *v,
        other => contract_violation(other, "float64"),
    }
}

/// Convert to a `String`, panicking on an unrecognized kind.
///
/// `Null` becomes the empty string.
pub fn to_string(value: &DynamicValue) -> String {
    match value {
        DynamicValue::Int(v) => v.to_string(),
        DynamicValue::Int64(v) => v.to_string(),
        DynamicValue::String(s) => s.clone(),
        DynamicValue::Float(v) => format_float(*v),
        DynamicValue::Null => String::new(),
        other => contract_violation(other, "string"),
    }
}

/// Checked form of [`to_int`].
pub fn try_to_int(value: &DynamicValue) -> Result<i32> {
    match value {
        DynamicValue::Int(v) => Ok(*v),
        DynamicValue::Int64(v) => Ok(*v as i32),
        DynamicValue::String(s) => parse_strict(s, "int"),
        DynamicValue::Float(v) => Ok(*v as i32),
        other => Err(unexpected(other, "int")),
    }
}

/// Checked form of [`to_int64`].
pub fn try_to_int64(value: &DynamicValue) -> Result<i64> {
    match value {
        DynamicValue::Int(v) => Ok(i64::from(*v)),
        DynamicValue::Int64(v) => Ok(*v),
        DynamicValue::String(s) => parse_strict(s, "int64"),
        DynamicValue::Float(v) => Ok(*v as i64),
        other => Err(unexpected(other, "int64")),
    }
}

/// Checked form of [`to_float64`].
pub fn try_to_float64(value: &DynamicValue) -> Result<f64> {
    match value {
        DynamicValue::Int(v) => Ok(f64::from(*v)),
        DynamicValue::Int64(v) => Ok(*v as f64),
        DynamicValue::String(s) => parse_strict(s, "float64"),
        DynamicValue::Float(v) => Ok(*v),
        other => Err(unexpected(other, "float64")),
    }
}

/// Checked form of [`to_string`].
pub fn try_to_string(value: &DynamicValue) -> Result<String> {
    match value {
        DynamicValue::Int(v) => Ok(v.to_string()),
        DynamicValue::Int64(v) => Ok(v.to_string()),
        DynamicValue::String(s) => Ok(s.clone()),
        DynamicValue::Float(v) => Ok(format_float(*v)),
        DynamicValue::Null => Ok(String::new()),
        other => Err(unexpected(other, "string")),
    }
}

fn strip_separators(s: &str) -> String {
    s.replace(',', "")
}

fn parse_integer_lenient<T>(s: &str, min: T, max: T) -> T
where
    T: FromStr<Err = ParseIntError> + Default,
{
    match strip_separators(s).parse::<T>() {
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => max,
            IntErrorKind::NegOverflow => min,
            _ => T::default(),
        },
    }
}

fn parse_strict<T: FromStr>(s: &str, target: &'static str) -> Result<T> {
    let input = strip_separators(s);
    input
        .parse()
        .map_err(|_| FetchKitError::Parse { input, target })
}

/// Shortest decimal that round-trips, never in exponent form.
fn format_float(v: f64) -> String {
    if v.is_infinite() {
        let sign = if v > 0.0 { '+' } else { '-' };
        format!("{sign}Inf")
    } else {
        v.to_string()
    }
}

fn unexpected(value: &DynamicValue, target: &'static str) -> FetchKitError {
    FetchKitError::UnexpectedKind {
        kind: value.kind(),
        target,
    }
}

#[cold]
fn contract_violation(value: &DynamicValue, target: &'static str) -> ! {
    tracing::error!(
        kind = %value.kind(),
        value = ?value,
        wanted = target,
        "unexpected value kind"
    );
    panic!(
        "cannot convert {} value {:?} to {}",
        value.kind(),
        value,
        target
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn test_to_int() {
        let cases: Vec<(DynamicValue, i32)> = vec![
            (DynamicValue::Int(9), 9),
            (DynamicValue::Int64(121), 121),
            (DynamicValue::from("23"), 23),
            (DynamicValue::from("2,300"), 2300),
            (DynamicValue::from("2,300,999"), 2300999),
            (DynamicValue::Float(99.4), 99),
            (DynamicValue::Float(-99.9), -99),
        ];

        for (value, expected) in cases {
            assert_eq!(to_int(&value), expected, "for {:?}", value);
        }
    }

    #[test]
    fn test_to_int64() {
        let cases: Vec<(DynamicValue, i64)> = vec![
            (DynamicValue::Int(9), 9),
            (DynamicValue::Int64(121121121121), 121121121121),
            (DynamicValue::from("2323232323"), 2323232323),
            (DynamicValue::from("2,323,232,323"), 2323232323),
            (DynamicValue::Float(9988776655.4), 9988776655),
        ];

        for (value, expected) in cases {
            assert_eq!(to_int64(&value), expected, "for {:?}", value);
        }
    }

    #[test]
    fn test_to_float64() {
        let cases: Vec<(DynamicValue, f64)> = vec![
            (DynamicValue::Int(9), 9.0),
            (DynamicValue::Int64(121), 121.0),
            (DynamicValue::from("23.45"), 23.45),
            (DynamicValue::from("2300.123"), 2300.123),
            (DynamicValue::from("2,300.123"), 2300.123),
            (DynamicValue::from("2,000,300.123"), 2000300.123),
            (DynamicValue::Float(99.4), 99.4),
        ];

        for (value, expected) in cases {
            assert_eq!(to_float64(&value), expected, "for {:?}", value);
        }
    }

    #[test]
    fn test_to_string() {
        let cases: Vec<(DynamicValue, &str)> = vec![
            (DynamicValue::Int(9), "9"),
            (DynamicValue::Int64(121), "121"),
            (DynamicValue::from("23"), "23"),
            (DynamicValue::Float(99.4), "99.4"),
            (DynamicValue::Float(5.0), "5"),
            (DynamicValue::Float(1e21), "1000000000000000000000"),
            (DynamicValue::Float(f64::INFINITY), "+Inf"),
            (DynamicValue::Null, ""),
        ];

        for (value, expected) in cases {
            assert_eq!(to_string(&value), expected, "for {:?}", value);
        }
    }

    #[test]
    fn test_idempotent_on_typed_input() {
        for raw in ["2,300,999", "-17", "99"] {
            let once = to_int(&DynamicValue::from(raw));
            assert_eq!(to_int(&DynamicValue::Int(once)), once);

            let once = to_int64(&DynamicValue::from(raw));
            assert_eq!(to_int64(&DynamicValue::Int64(once)), once);

            let once = to_float64(&DynamicValue::from(raw));
            assert_eq!(to_float64(&DynamicValue::Float(once)), once);
        }
    }

    #[test]
    fn test_unparseable_string_is_zero() {
        assert_eq!(to_int(&DynamicValue::from("abc")), 0);
        assert_eq!(to_int64(&DynamicValue::from("")), 0);
        assert_eq!(to_float64(&DynamicValue::from("1.2.3")), 0.0);
    }

    #[test]
    fn test_out_of_range_string_saturates() {
        assert_eq!(to_int(&DynamicValue::from("2,323,232,323")), i32::MAX);
        assert_eq!(to_int(&DynamicValue::from("-9,999,999,999")), i32::MIN);
        assert_eq!(
            to_int64(&DynamicValue::from("99999999999999999999")),
            i64::MAX
        );
    }

    #[test]
    #[should_panic(expected = "cannot convert bool value Bool(true) to int")]
    fn test_to_int_rejects_bool() {
        to_int(&DynamicValue::Bool(true));
    }

    #[test]
    #[should_panic(expected = "cannot convert null")]
    fn test_to_int64_rejects_null() {
        to_int64(&DynamicValue::Null);
    }

    #[test]
    #[should_panic(expected = "to float64")]
    fn test_to_float64_rejects_sequence() {
        to_float64(&DynamicValue::Seq(vec![DynamicValue::Int(1)]));
    }

    #[test]
    #[should_panic(expected = "cannot convert mapping")]
    fn test_to_string_rejects_map() {
        to_string(&DynamicValue::Map(Default::default()));
    }

    #[test]
    fn test_checked_parse_failure() {
        let err = try_to_int(&DynamicValue::from("12abc")).unwrap_err();
        assert!(matches!(
            err,
            FetchKitError::Parse { ref input, target: "int" } if input == "12abc"
        ));

        let err = try_to_int(&DynamicValue::from("2,323,232,323")).unwrap_err();
        assert!(matches!(err, FetchKitError::Parse { .. }));

        assert!(try_to_float64(&DynamicValue::from("x")).is_err());
    }

    #[test]
    fn test_checked_success_matches_unchecked() {
        let value = DynamicValue::from("2,300,999");
        assert_eq!(try_to_int(&value).unwrap(), to_int(&value));
        assert_eq!(try_to_int64(&value).unwrap(), to_int64(&value));
        assert_eq!(try_to_float64(&value).unwrap(), to_float64(&value));
        assert_eq!(try_to_string(&DynamicValue::Null).unwrap(), "");
    }

    #[test]
    fn test_checked_unexpected_kind() {
        let err = try_to_string(&DynamicValue::Bool(false)).unwrap_err();
        assert!(matches!(
            err,
            FetchKitError::UnexpectedKind {
                kind: ValueKind::Bool,
                target: "string"
            }
        ));

        let err = try_to_int64(&DynamicValue::Null).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert null to int64");
    }
}
