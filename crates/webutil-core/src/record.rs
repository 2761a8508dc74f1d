//! Structured-record helpers: presence checks and field projection.
//!
//! Records are JSON objects ([`serde_json::Map`]); field order is
//! preserved, so projection output follows the requested key order.

use serde_json::Value;

use crate::error::{Error, Result};

/// A structured record: an ordered mapping from field names to values.
pub type Record = serde_json::Map<String, Value>;

/// Returns true unless `value` is null or the empty string.
///
/// Null covers both the null and undefined sentinels, which serde
/// collapses into one. Zero and `false` are meaningful values.
#[must_use]
pub fn is_meaningful(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Returns true iff `value` is a record with zero fields.
///
/// Non-object values are never empty records. The check is a structural
/// field count, not a comparison of any serialized form.
#[must_use]
pub fn is_empty_record(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.is_empty())
}

/// Produces a new record containing only the requested fields of `data`.
///
/// Keys are copied in `keys` order when they are non-empty and owned by
/// `data`; absent or empty keys are silently skipped.
///
/// # Errors
///
/// Returns an [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
/// error when `data` or `keys` is empty.
pub fn project(data: &Record, keys: &[&str]) -> Result<Record> {
    if data.is_empty() {
        return Err(Error::invalid_argument("data must be a non-empty record", "project"));
    }
    if keys.is_empty() {
        return Err(Error::invalid_argument("keys must be a non-empty list", "project"));
    }
    let mut result = Record::new();
    for &key in keys {
        if key.is_empty() {
            continue;
        }
        if let Some(value) = data.get(key) {
            result.insert(key.to_string(), value.clone());
        }
    }
    Ok(result)
}
