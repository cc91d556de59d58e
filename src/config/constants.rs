//! Configuration constants.

/// Snapshot written by the fetcher, read and (by default) overwritten in place.
pub const DEFAULT_INPUT_PATH: &str = "data/entry-requirements.json";

/// Modules whose log level follows `--log-level`.
pub const CRATE_LOG_TARGET: &str = "entry_classifier";
