//! `recordset` is a small library for fluent, chainable transformations over an
//! in-memory [`Collection`] of schemaless records.
//!
//! A record is a JSON-style mapping from field name to value
//! ([`serde_json::Map<String, Value>`]); records in one collection do not have
//! to share keys. Every verb on [`Collection`] returns a new collection, so a
//! whole pipeline reads as one chain, ending with [`Collection::into_records`]
//! to get the plain `Vec<Record>` back.
//!
//! ## The verbs
//!
//! - [`Collection::keep`]: filter by predicate (chained calls AND together)
//! - [`Collection::head`] / [`Collection::tail`]: first/last `n` records, in order
//! - [`Collection::select`]: project each record onto exactly the given keys
//! - [`Collection::mutate`] / [`Collection::derive`]: write derived fields into
//!   cloned records, in assignment order
//! - [`Collection::sort`]: stable reorder by a key function, ascending or descending
//! - [`Collection::len`] / [`Collection::into_records`]: count and materialize
//!
//! ## Quick example: a pipeline over in-memory records
//!
//! ```rust
//! use recordset::{json, record, Assignments, Collection};
//!
//! let sales = Collection::new(vec![
//!     record!({"region": "north", "units": 12, "price": 4.0}),
//!     record!({"region": "south", "units": 3,  "price": 4.0}),
//!     record!({"region": "north", "units": 7,  "price": 2.5}),
//! ]);
//!
//! let report = sales
//!     .keep(|r| r["units"].as_i64().is_some_and(|u| u >= 5))
//!     .mutate(&Assignments::new().set("revenue", |r| {
//!         json!(r["units"].as_i64().unwrap() as f64 * r["price"].as_f64().unwrap())
//!     }))
//!     .sort(|r| r["revenue"].clone(), true)
//!     .select(&["region", "revenue"])?
//!     .into_records();
//!
//! assert_eq!(report[0], record!({"region": "north", "revenue": 48.0}));
//! assert_eq!(report[1], record!({"region": "north", "revenue": 17.5}));
//! # Ok::<(), recordset::Error>(())
//! ```
//!
//! ## Reading records from files
//!
//! The [`ingest`] module reads CSV, JSON, and NDJSON files (auto-detected by
//! extension) into a [`Collection`], with optional glob expansion over many
//! files:
//!
//! ```no_run
//! use recordset::ingest::{self, IngestOptions};
//!
//! # fn main() -> Result<(), recordset::Error> {
//! let people = ingest::records_from_path("people.csv", &IngestOptions::default())?;
//! let events = ingest::records_from_glob("events/*.ndjson", &IngestOptions::default())?;
//! println!("people={} events={}", people.len(), events.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`collection`]: the [`Collection`] type and its chainable verbs
//! - [`mod@record`]: the [`Record`] alias, the [`record!`] macro, and value helpers
//!   ([`record::get_path`], [`record::compare_values`])
//! - [`ingest`]: unified ingestion entrypoints and format-specific implementations
//! - [`error`]: the crate-wide error type
//!
//! ## Errors
//!
//! Fallible verbs return [`Result`]:
//!
//! - [`Error::InvalidCount`]: `head`/`tail` called with a negative count
//! - [`Error::KeyNotFound`]: `select` asked for a key some record does not have
//! - I/O, CSV, glob, and malformed-input errors from [`ingest`]

pub mod collection;
pub mod error;
pub mod ingest;
pub mod record;

pub use collection::{Assignments, Collection};
pub use error::{Error, Result};
pub use record::Record;

// The `record!` macro expands to `$crate::json!`/`$crate::Value` paths.
pub use serde_json::{json, Value};
