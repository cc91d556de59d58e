//! Main application modules.
//!
//! This module provides the statistics printing used by the main application.

pub mod statistics;

// Re-export public API
pub use statistics::{print_classification_statistics, print_warnings};
