//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_INPUT_PATH;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// Adds one line per classified record
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use entry_classifier::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("snapshot.json"),
///     output: Some(PathBuf::from("classified.json")),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Document to classify
    pub input: PathBuf,

    /// Where to write the result; `None` overwrites `input`
    pub output: Option<PathBuf>,

    /// Print the result to stdout instead of writing a file
    pub dry_run: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Path the result is written to, or `None` for a dry run.
    pub fn output_path(&self) -> Option<&Path> {
        if self.dry_run {
            None
        } else {
            Some(self.output.as_deref().unwrap_or(&self.input))
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: None,
            dry_run: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Classify the default snapshot in place
/// entry_classifier
///
/// # Write to a separate file
/// entry_classifier --input data/raw.json --output data/classified.json
///
/// # Print the result without writing anything
/// entry_classifier --dry --log-level warn
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "entry_classifier",
    about = "Classifies country entry requirements into color categories."
)]
pub struct Opt {
    /// Input document
    #[arg(long, value_parser, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Output document (default: overwrite the input)
    #[arg(long, value_parser)]
    pub output: Option<PathBuf>,

    /// Print the classified document to stdout and write nothing
    #[arg(long = "dry")]
    pub dry_run: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input: opt.input,
            output: opt.output,
            dry_run: opt.dry_run,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
