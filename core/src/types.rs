//! Shared primitive types used across the crate.

use serde_json::Value;

/// A flat record as returned by the row store: column name -> JSON value.
pub type Record = serde_json::Map<String, Value>;

/// String value of `column` in a record; None for null or an absent key.
pub fn str_value<'a>(row: &'a Record, column: &str) -> Option<&'a str> {
    row.get(column).and_then(Value::as_str)
}

/// Numeric value of `column` in a record; None for null, absent, or non-numeric.
pub fn f64_value(row: &Record, column: &str) -> Option<f64> {
    row.get(column).and_then(Value::as_f64)
}

/// Normalize a join or grouping key. Ids may arrive as JSON numbers or
/// strings depending on the backend driver; both map to the same key.
/// Null never matches anything.
pub fn value_key(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
