//! Cell-value conversion helpers for Polars `AnyValue`s.

use polars::prelude::AnyValue;

/// Converts an `AnyValue` to its string representation, with an empty string
/// standing in for null.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(value) => value.to_string(),
        AnyValue::StringOwned(value) => value.to_string(),
        other => other.to_string(),
    }
}

/// Converts an `AnyValue` to f64, parsing text cells. Returns `None` for null
/// or non-numeric values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Float32(value) => Some(f64::from(value)),
        AnyValue::Float64(value) => Some(value),
        AnyValue::Int8(value) => Some(f64::from(value)),
        AnyValue::Int16(value) => Some(f64::from(value)),
        AnyValue::Int32(value) => Some(f64::from(value)),
        AnyValue::Int64(value) => Some(value as f64),
        AnyValue::UInt8(value) => Some(f64::from(value)),
        AnyValue::UInt16(value) => Some(f64::from(value)),
        AnyValue::UInt32(value) => Some(f64::from(value)),
        AnyValue::UInt64(value) => Some(value as f64),
        AnyValue::String(value) => parse_decimal(value),
        AnyValue::StringOwned(value) => parse_decimal(&value),
        _ => None,
    }
}

/// Parses a decimal number, accepting a comma as the decimal separator.
///
/// The biometric exports use the Brazilian locale ("70,5"); values already
/// written with a dot pass through unchanged. Returns `None` for empty or
/// non-numeric text.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', ".").parse::<f64>().ok()
}
