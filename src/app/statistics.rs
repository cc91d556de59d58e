//! Statistics printing.

use log::{info, warn};
use strum::IntoEnumIterator;

use crate::error_handling::DatasetWarning;
use crate::models::Color;
use crate::pipeline::{ClassificationStats, FactKind};

/// Logs per-color counts and where each fact came from.
///
/// Works with both plain and JSON log formats (log::info! handles formatting).
pub fn print_classification_statistics(stats: &ClassificationStats) {
    info!(
        "Classified {} of {} record{}",
        stats.total_classified(),
        stats.total(),
        if stats.total() == 1 { "" } else { "s" }
    );

    for color in Color::iter() {
        let count = stats.color_count(color);
        if count > 0 {
            info!("   {}: {}", color, count);
        }
    }
    if stats.unclassified() > 0 {
        info!("   unknown: {}", stats.unclassified());
    }

    info!("Fact sources (trusted / inferred / unknown):");
    for kind in FactKind::iter() {
        let counts = stats.fact_counts(kind);
        info!(
            "   {}: {} / {} / {}",
            kind, counts.trusted, counts.inferred, counts.unknown
        );
    }
}

/// Logs validation warnings, one line each.
pub fn print_warnings(warnings: &[DatasetWarning]) {
    for warning in warnings {
        warn!("{}", warning);
    }
}
