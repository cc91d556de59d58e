//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `entry_classifier` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use entry_classifier::config::Opt;
use entry_classifier::initialization::init_logger_with;
use entry_classifier::{run_classification, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config: Config = Opt::parse().into();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_classification(config).await {
        Ok(report) => {
            if let Some(rendered) = report.rendered {
                println!("{}", rendered);
            } else if let Some(path) = report.output {
                println!(
                    "Classified {} of {} countr{} ({} unknown) in {:.2}s",
                    report.classified,
                    report.total,
                    if report.total == 1 { "y" } else { "ies" },
                    report.unclassified,
                    report.elapsed_seconds
                );
                println!("Results saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("entry_classifier error: {:#}", e);
            process::exit(1);
        }
    }
}
