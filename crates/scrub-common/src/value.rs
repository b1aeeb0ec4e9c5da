//! Polars `AnyValue` utility functions.
//!
//! Cleaning stages work row-wise over heterogeneous cells. These helpers
//! render any cell as text and parse numeric text, so a stage never has to
//! care which dtype a raw column arrived with.

use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to its `String` representation.
///
/// Returns an empty string for `Null` and formats floating-point values
/// without unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use scrub_common::value_to_string;
///
/// assert_eq!(value_to_string(AnyValue::Null), "");
/// assert_eq!(value_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(value_to_string(AnyValue::Float64(10.50)), "10.5");
/// assert_eq!(value_to_string(AnyValue::String("shoes")), "shoes");
/// ```
pub fn value_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Whether a cell holds the null sentinel.
///
/// Null is distinct from every valid value, including the empty string.
pub fn is_null(value: &AnyValue<'_>) -> bool {
    matches!(value, AnyValue::Null)
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use scrub_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
