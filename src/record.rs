//! Core data model: records and value helpers.
//!
//! A [`Record`] is one item in a [`crate::Collection`] — a mapping from field
//! name to JSON value, with no fixed schema. Distinct records in the same
//! collection may carry different keys. The crate enables `serde_json`'s
//! `preserve_order` feature, so a record's key order is its insertion order.

use std::cmp::Ordering;

use serde_json::Value;

/// One item in a collection: field name mapped to an arbitrary JSON value.
///
/// Build one with the [`record!`](crate::record!) macro, by parsing JSON, or
/// by inserting into an empty map:
///
/// ```rust
/// use recordset::{record, Record};
///
/// let r: Record = record!({"name": "Ada", "score": 98.5});
/// assert_eq!(r["name"], "Ada");
/// ```
pub type Record = serde_json::Map<String, Value>;

/// Build a [`Record`] from a JSON object literal.
///
/// Thin wrapper over [`serde_json::json!`] that unwraps the object map.
///
/// # Panics
///
/// Panics if the literal is not a JSON object (e.g. a bare array or scalar).
///
/// ```rust
/// use recordset::record;
///
/// let r = record!({"i": 0, "label": "first"});
/// assert_eq!(r.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    ($($json:tt)+) => {{
        match $crate::json!($($json)+) {
            $crate::Value::Object(map) => map,
            other => panic!("record! expects a json object literal, got {other}"),
        }
    }};
}

/// Look up a value in a record by dot-separated path (e.g. `"user.name"`).
///
/// Returns `None` if any segment is missing or an intermediate value is not
/// an object.
///
/// ```rust
/// use recordset::record::get_path;
/// use recordset::record;
///
/// let r = record!({"id": 1, "user": {"name": "Ada"}});
/// assert_eq!(get_path(&r, "user.name").and_then(|v| v.as_str()), Some("Ada"));
/// assert!(get_path(&r, "user.email").is_none());
/// ```
pub fn get_path<'a>(record: &'a Record, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = record.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Total order over JSON values, used by [`crate::Collection::sort`].
///
/// - Values of the same type compare naturally: numbers numerically (exact
///   for integer pairs, `f64::total_cmp` otherwise), strings and booleans by
///   their `Ord`, arrays element-wise then by length, objects by member
///   count (coarse, but keeps the order total).
/// - Values of different types compare by type rank:
///   null < bool < number < string < array < object.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => {
            for (xv, yv) in x.iter().zip(y.iter()) {
                let ordering = compare_values(xv, yv);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            x.len().cmp(&y.len())
        }
        (Value::Object(x), Value::Object(y)) => x.len().cmp(&y.len()),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn compare_numbers(x: &serde_json::Number, y: &serde_json::Number) -> Ordering {
    match (x.as_i64(), y.as_i64()) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => {
            let a = x.as_f64().unwrap_or(f64::NAN);
            let b = y.as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        }
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
