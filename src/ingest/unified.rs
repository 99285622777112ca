//! Unified ingestion entrypoint.
//!
//! Most callers should use [`records_from_path`], which reads a file into a
//! [`Collection`] of schemaless records.
//!
//! - If [`IngestOptions::format`] is `None`, the format is inferred from the
//!   file extension.
//! - If an [`super::observability::IngestObserver`] is provided,
//!   success/failure/alerts are reported to it.
//! - [`records_from_glob`] expands a glob pattern and concatenates the
//!   records of every matching file.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::collection::Collection;
use crate::error::{Error, Result};

use super::observability::{IngestContext, IngestObserver, IngestSeverity, IngestStats};
use super::{csv, json};

/// Supported ingestion formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestFormat {
    /// Comma-separated values.
    Csv,
    /// JSON array-of-objects, single object, or NDJSON.
    Json,
}

impl IngestFormat {
    /// Parse an ingestion format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" | "jsonl" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options controlling unified ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestOptions {
    /// If `None`, auto-detect format from the file extension.
    pub format: Option<IngestFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestSeverity,
}

impl fmt::Debug for IngestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            format: None,
            observer: None,
            alert_at_or_above: IngestSeverity::Critical,
        }
    }
}

/// Unified ingestion entry point for path-based sources.
///
/// - If `options.format` is `None`, format is inferred from the file
///   extension (`.csv`, `.json`, `.ndjson`, `.jsonl`).
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with record count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ## CSV (auto-detect by extension)
///
/// ```no_run
/// use recordset::ingest::{self, IngestOptions};
///
/// # fn main() -> Result<(), recordset::Error> {
/// let people = ingest::records_from_path("people.csv", &IngestOptions::default())?;
/// println!("records={}", people.len());
/// # Ok(())
/// # }
/// ```
///
/// ## Force a format explicitly (override extension inference)
///
/// ```no_run
/// use recordset::ingest::{self, IngestFormat, IngestOptions};
///
/// # fn main() -> Result<(), recordset::Error> {
/// let opts = IngestOptions {
///     format: Some(IngestFormat::Json),
///     ..Default::default()
/// };
///
/// // Useful when a file has no extension or you want to override inference.
/// let events = ingest::records_from_path("events_export", &opts)?;
/// println!("records={}", events.len());
/// # Ok(())
/// # }
/// ```
///
/// ## Observability (stderr logging + alert threshold)
///
/// ```no_run
/// use std::sync::Arc;
///
/// use recordset::ingest::{self, IngestOptions, IngestSeverity, StdErrObserver};
///
/// # fn main() -> Result<(), recordset::Error> {
/// let opts = IngestOptions {
///     observer: Some(Arc::new(StdErrObserver::default())),
///     alert_at_or_above: IngestSeverity::Critical,
///     ..Default::default()
/// };
///
/// // Missing files are treated as Critical and will trigger `on_alert` at this threshold.
/// let _err = ingest::records_from_path("does_not_exist.csv", &opts).unwrap_err();
/// # Ok(())
/// # }
/// ```
pub fn records_from_path(path: impl AsRef<Path>, options: &IngestOptions) -> Result<Collection> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = IngestContext {
        path: path.to_path_buf(),
        format,
    };

    let result = match format {
        IngestFormat::Csv => csv::records_from_path(path),
        IngestFormat::Json => json::records_from_path(path),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(collection) => obs.on_success(
                &ctx,
                IngestStats {
                    records: collection.len(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Expand a glob pattern and read every matching file via
/// [`records_from_path`], concatenating the records.
///
/// Matches are read in ascending path order, so the concatenation order is
/// deterministic. A pattern that matches nothing fails with
/// [`Error::InvalidInput`].
///
/// ```no_run
/// use recordset::ingest::{self, IngestOptions};
///
/// # fn main() -> Result<(), recordset::Error> {
/// let all = ingest::records_from_glob("logs/2024-*.ndjson", &IngestOptions::default())?;
/// println!("records={}", all.len());
/// # Ok(())
/// # }
/// ```
pub fn records_from_glob(pattern: &str, options: &IngestOptions) -> Result<Collection> {
    let mut paths = Vec::new();
    for entry in glob::glob(pattern)? {
        paths.push(entry.map_err(|e| Error::Io(e.into_error()))?);
    }
    paths.sort();

    if paths.is_empty() {
        return Err(Error::InvalidInput {
            message: format!("glob pattern '{pattern}' matched no files"),
        });
    }

    let mut records = Vec::new();
    for path in &paths {
        records.extend(records_from_path(path, options)?.into_records());
    }
    Ok(Collection::new(records))
}

fn severity_for_error(e: &Error) -> IngestSeverity {
    match e {
        Error::Io(_) => IngestSeverity::Critical,
        Error::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestSeverity::Critical,
            _ => IngestSeverity::Error,
        },
        _ => IngestSeverity::Error,
    }
}

fn infer_format_from_path(path: &Path) -> Result<IngestFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::InvalidInput {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    IngestFormat::from_extension(ext).ok_or_else(|| Error::InvalidInput {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}
