//! JSON ingestion implementation.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"a":1}, {"a":2}]`
//! - A single JSON object: `{"a":1}` (one record)
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`
//!
//! Records stay schemaless: whatever keys each object carries become that
//! record's fields, nested values included.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::collection::Collection;
use crate::error::{Error, Result};

/// Read a JSON file into a [`Collection`].
pub fn records_from_path(path: impl AsRef<Path>) -> Result<Collection> {
    let text = fs::read_to_string(path)?;
    records_from_str(&text)
}

/// Read JSON from an in-memory string into a [`Collection`].
pub fn records_from_str(input: &str) -> Result<Collection> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        match value {
            Value::Array(items) => records_from_values(items),
            Value::Object(record) => Ok(Collection::new(vec![record])),
            _ => Err(Error::InvalidInput {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        // Fall back to NDJSON.
        let mut records = Vec::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let value =
                serde_json::from_str::<Value>(line).map_err(|e| Error::InvalidInput {
                    message: format!("invalid ndjson at line {}: {}", i + 1, e),
                })?;
            match value {
                Value::Object(record) => records.push(record),
                other => {
                    return Err(Error::InvalidInput {
                        message: format!("ndjson line {} is not a json object: {}", i + 1, other),
                    });
                }
            }
        }
        Ok(Collection::new(records))
    }
}

fn records_from_values(values: Vec<Value>) -> Result<Collection> {
    let mut records = Vec::with_capacity(values.len());
    for (idx0, value) in values.into_iter().enumerate() {
        let row_num = idx0 + 1;
        match value {
            Value::Object(record) => records.push(record),
            other => {
                return Err(Error::InvalidInput {
                    message: format!("row {row_num} is not a json object: {other}"),
                });
            }
        }
    }
    Ok(Collection::new(records))
}
