//! entry_classifier library: country entry-requirement classification
//!
//! This library reads a snapshot of per-country entry requirement texts
//! (visa rules, electronic authorizations, vaccinations), infers missing facts
//! from the Italian-language text, and assigns each country one of five color
//! categories.
//!
//! The core is synchronous and pure:
//! - [`extract`]: text → facts, one ordered rule table per fact
//! - [`classify`]: facts → color, a fixed-priority decision table
//! - [`pipeline`]: trusted/inferred reconciliation over a whole dataset
//!
//! [`run_classification`] wraps it with document I/O.
//!
//! # Example
//!
//! ```no_run
//! use entry_classifier::{run_classification, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     dry_run: true,
//!     ..Default::default()
//! };
//!
//! let report = run_classification(config).await?;
//! println!("Classified {} of {} countries", report.classified, report.total);
//! # Ok(())
//! # }
//! ```

mod app;
pub mod classify;
pub mod config;
pub mod error_handling;
pub mod extract;
pub mod initialization;
pub mod models;
pub mod pipeline;
pub mod storage;

// Re-export public API
pub use classify::{classify, classify_facts};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{DatasetError, DatasetWarning};
pub use extract::extract_facts;
pub use models::{Color, EntryDataset, EntryRecord, Facts, Tristate};
pub use pipeline::{enrich_dataset, enrich_record, reconcile, ClassificationStats};
pub use run::{run_classification, ClassifyReport};

// Internal run module (load, classify, write)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::app::{print_classification_statistics, print_warnings};
    use crate::config::Config;
    use crate::error_handling::DatasetWarning;
    use crate::pipeline::{enrich_dataset, ClassificationStats};
    use crate::storage::{load_dataset, render_dataset, save_dataset, validate_dataset};

    /// Results of a classification run.
    #[derive(Debug, Clone)]
    pub struct ClassifyReport {
        /// Number of records processed
        pub total: usize,
        /// Records assigned a color
        pub classified: usize,
        /// Records left in the unknown category
        pub unclassified: usize,
        /// Detailed counters
        pub stats: ClassificationStats,
        /// Validation warnings found in the input
        pub warnings: Vec<DatasetWarning>,
        /// File written, or `None` for a dry run
        pub output: Option<PathBuf>,
        /// The classified document, for a dry run
        pub rendered: Option<String>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a classification pass with the provided configuration.
    ///
    /// Reads the input document, validates it, enriches every record, and
    /// writes the result (or keeps it in the report for a dry run).
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file cannot be read or parsed
    /// - Two records share a `cca3` code
    /// - The output file cannot be written
    pub async fn run_classification(config: Config) -> Result<ClassifyReport> {
        let start = Instant::now();

        let dataset = load_dataset(&config.input)
            .await
            .with_context(|| format!("Failed to load {}", config.input.display()))?;
        info!(
            "Loaded {} records from {} (generated {})",
            dataset.results.len(),
            config.input.display(),
            dataset.generated_at_label()
        );

        let warnings = validate_dataset(&dataset).context("Input dataset is invalid")?;
        print_warnings(&warnings);

        let (dataset, stats) = enrich_dataset(dataset);
        print_classification_statistics(&stats);

        let (output, rendered) = match config.output_path() {
            Some(path) => {
                save_dataset(path, &dataset)
                    .await
                    .with_context(|| format!("Failed to save {}", path.display()))?;
                info!("Updated classifications written to {}", path.display());
                (Some(path.to_path_buf()), None)
            }
            None => {
                let rendered =
                    render_dataset(&dataset).context("Failed to render classified dataset")?;
                (None, Some(rendered))
            }
        };

        Ok(ClassifyReport {
            total: stats.total(),
            classified: stats.total_classified(),
            unclassified: stats.unclassified(),
            stats,
            warnings,
            output,
            rendered,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }
}
