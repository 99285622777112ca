//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`records_from_path`] (from [`unified`]) which:
//!
//! - auto-detects format by file extension (or you can override via [`IngestOptions`])
//! - reads the file into an in-memory [`crate::Collection`] of schemaless records
//! - optionally reports success/failure/alerts to an [`IngestObserver`]
//!
//! [`records_from_glob`] reads every file a glob pattern matches and
//! concatenates the records. Format-specific functions are also available
//! under:
//! - [`csv`]
//! - [`json`]

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, FileObserver, IngestContext, IngestObserver, IngestSeverity, IngestStats,
    StdErrObserver,
};
pub use unified::{records_from_glob, records_from_path, IngestFormat, IngestOptions};
