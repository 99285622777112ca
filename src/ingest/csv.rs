//! CSV ingestion implementation.

use std::path::Path;

use serde_json::Value;

use crate::collection::Collection;
use crate::error::Result;
use crate::record::Record;

/// Read a CSV file into a [`Collection`].
///
/// Rules:
///
/// - CSV must have headers; header names become record keys, in header order.
/// - Cell values are inferred per cell: empty -> null, else integer, else
///   float, else the literals `true`/`false`, else string.
/// - Rows must match the header width (the reader rejects ragged rows).
pub fn records_from_path(path: impl AsRef<Path>) -> Result<Collection> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    records_from_reader(&mut reader)
}

/// Read CSV data from an existing CSV reader.
pub fn records_from_reader<R: std::io::Read>(reader: &mut csv::Reader<R>) -> Result<Collection> {
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let mut record = Record::new();
        for (header, raw) in headers.iter().zip(row.iter()) {
            record.insert(header.to_string(), infer_value(raw));
        }
        records.push(record);
    }
    Ok(Collection::new(records))
}

fn infer_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        // Non-finite parses ("inf", "NaN") fall through to the string arm.
        if f.is_finite() {
            return Value::from(f);
        }
    }
    match trimmed {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(trimmed.to_string()),
    }
}
