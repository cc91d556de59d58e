//! Error type definitions.
//!
//! This module defines the errors raised at the application boundary. The
//! classification core itself is total and has no error type.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for reading, validating and writing the dataset document.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The input document could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output document could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a valid interchange document.
    #[error("Invalid dataset document: {0}")]
    ParseError(#[source] serde_json::Error),

    /// The dataset could not be serialized.
    #[error("Failed to serialize dataset: {0}")]
    SerializeError(#[source] serde_json::Error),

    /// Two records share a `cca3` code.
    #[error("Duplicate country code '{code}' (records {first} and {second})")]
    DuplicateCode {
        code: String,
        first: usize,
        second: usize,
    },
}

/// Problems found in an otherwise usable document.
///
/// These are reported and the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetWarning {
    /// `total` does not match the number of records; it is corrected on output.
    TotalMismatch { declared: usize, actual: usize },
    /// The fetcher recorded an error for this country; its text is likely empty.
    FetchError { cca3: String, message: String },
}

impl std::fmt::Display for DatasetWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetWarning::TotalMismatch { declared, actual } => write!(
                f,
                "Declared total {} does not match {} records",
                declared, actual
            ),
            DatasetWarning::FetchError { cca3, message } => {
                write!(f, "{}: fetch error in snapshot: {}", cca3, message)
            }
        }
    }
}
