//! Error handling.
//!
//! This module provides:
//! - `InitializationError`: logger setup failures
//! - `DatasetError`: document I/O and validation failures
//! - `DatasetWarning`: non-fatal problems reported during validation
//!
//! Extraction and classification never fail; "not enough evidence" is the
//! unknown category, not an error.

mod types;

// Re-export public API
pub use types::{DatasetError, DatasetWarning, InitializationError};
