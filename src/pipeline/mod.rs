//! Per-record enrichment: infer, reconcile, classify.
//!
//! Each record depends only on its own text and `extracted` values, so records
//! are processed independently and in input order.

mod stats;

pub use stats::{ClassificationStats, FactKind, FactSourceCounts};

use log::debug;

use crate::classify::classify_facts;
use crate::extract::extract_facts;
use crate::models::{EntryDataset, EntryRecord, Facts};

/// Merges trusted and inferred facts. A known trusted value always wins;
/// unknown trusted values fall back to the inferred ones.
///
/// Extra keys of the trusted `extracted` object are kept.
pub fn reconcile(trusted: &Facts, inferred: &Facts) -> Facts {
    Facts {
        visa_required: trusted.visa_required.or(inferred.visa_required),
        visa_free_days: trusted.visa_free_days.or(inferred.visa_free_days),
        e_authorization_required: trusted
            .e_authorization_required
            .or(inferred.e_authorization_required),
        vaccines_required: trusted.vaccines_required.or(inferred.vaccines_required),
        extra: trusted.extra.clone(),
    }
}

/// Fills in a record's facts and recomputes its color.
///
/// Only `extracted` and `color` change. Any color present in the input is
/// replaced by the one derived from the reconciled facts.
pub fn enrich_record(mut record: EntryRecord) -> EntryRecord {
    let inferred = extract_facts(record.visa_text.as_deref(), record.health_text.as_deref());
    let facts = reconcile(&record.extracted, &inferred);
    let color = classify_facts(&facts);

    debug!(
        "{}: visa={} e_auth={} vaccines={} days={:?} -> {}",
        record.cca3,
        facts.visa_required,
        facts.e_authorization_required,
        facts.vaccines_required,
        facts.visa_free_days,
        color.map_or("unknown", |c| c.as_str())
    );
    if record.color.is_some() && record.color != color {
        debug!(
            "{}: replacing stored color {:?} with {:?}",
            record.cca3, record.color, color
        );
    }

    record.extracted = facts;
    record.color = color;
    record
}

/// Enriches every record of a dataset and sets `total` to the record count.
pub fn enrich_dataset(dataset: EntryDataset) -> (EntryDataset, ClassificationStats) {
    let mut stats = ClassificationStats::new();
    let EntryDataset {
        generated_at,
        results,
        extra,
        ..
    } = dataset;

    let results: Vec<EntryRecord> = results
        .into_iter()
        .map(|record| {
            let trusted = record.extracted.clone();
            let enriched = enrich_record(record);
            stats.record(&trusted, &enriched.extracted, enriched.color);
            enriched
        })
        .collect();

    let dataset = EntryDataset {
        generated_at,
        total: results.len(),
        results,
        extra,
    };
    (dataset, stats)
}
