//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure the library can surface to a caller.
//!
//! Per-record problems never become errors: a malformed timestamp yields a
//! record with a null timestamp, and a document without any message boundary
//! yields an empty table. Whole-run problems do. Unreadable input, a missing
//! stop-word list or a bad filter date stop the run with a typed error the
//! caller can match on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::RecordTable;
///
/// fn load() -> Result<RecordTable> {
///     Ok(RecordTable::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A built-in detection pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Input bytes or generated output were not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Where the bytes came from (`"input decoding"`, `"output conversion"`)
        context: &'static str,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Unsupported output extension or format name.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        format: &'static str,
        message: String,
    },

    /// A date-range bound that is not `YYYY-MM-DD`.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        input: String,
        expected: &'static str,
    },

    /// An auxiliary resource required by an analysis could not be loaded.
    ///
    /// The stop-word list is the main case: without it the word frequency
    /// computation over the whole table is meaningless, so this is fatal.
    #[error("Missing {resource} at {}: {source}", path.display())]
    MissingResource {
        /// What the resource is (e.g., "stop-word list")
        resource: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(source: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion",
            source,
        }
    }
}

impl ChatlensError {
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    pub fn missing_resource(
        resource: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        ChatlensError::MissingResource {
            resource,
            path: path.into(),
            source,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, ChatlensError::Pattern(_))
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }

    /// `true` when a required auxiliary resource was missing. Callers should
    /// treat this as a configuration problem, not a data problem.
    pub fn is_missing_resource(&self) -> bool {
        matches!(self, ChatlensError::MissingResource { .. })
    }
}
