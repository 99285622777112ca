use thiserror::Error;

/// Convenience result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type returned by collection verbs and ingestion functions.
///
/// This is a single error enum shared by the in-memory verbs (`head`/`tail`
/// count validation, `select` projection) and by JSON/CSV ingestion.
#[derive(Debug, Error)]
pub enum Error {
    /// A record count passed to `head` or `tail` was not a non-negative
    /// whole number.
    #[error("count must be a non-negative whole number, got {0}")]
    InvalidCount(i64),

    /// A key requested by `select` is missing from a record.
    #[error("record {index} has no key '{key}'")]
    KeyNotFound { index: usize, key: String },

    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A glob pattern passed to multi-file ingestion could not be parsed.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// The input does not have an ingestible shape (non-object JSON row,
    /// empty input, unrecognized file extension, empty glob expansion, ...).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}
