//! Classification statistics.
//!
//! Counts how each record was classified and where each of its facts came
//! from. Records are independent, so the counters are plain integers filled in
//! a single pass.

use std::collections::HashMap;

use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

use crate::models::{Color, Facts};

/// The four facts, for per-fact bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FactKind {
    VisaRequired,
    VisaFreeDays,
    EAuthorizationRequired,
    VaccinesRequired,
}

impl FactKind {
    /// Field name as written in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            FactKind::VisaRequired => "visaRequired",
            FactKind::VisaFreeDays => "visaFreeDays",
            FactKind::EAuthorizationRequired => "eAuthorizationRequired",
            FactKind::VaccinesRequired => "vaccinesRequired",
        }
    }

    fn is_known(&self, facts: &Facts) -> bool {
        match self {
            FactKind::VisaRequired => facts.visa_required.is_known(),
            FactKind::VisaFreeDays => facts.visa_free_days.is_some(),
            FactKind::EAuthorizationRequired => facts.e_authorization_required.is_known(),
            FactKind::VaccinesRequired => facts.vaccines_required.is_known(),
        }
    }
}

impl std::fmt::Display for FactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a reconciled fact came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FactSourceCounts {
    /// Already known in the input
    pub trusted: usize,
    /// Filled in from text
    pub inferred: usize,
    /// Still unknown after inference
    pub unknown: usize,
}

/// Per-run classification counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationStats {
    colors: HashMap<Color, usize>,
    unclassified: usize,
    facts: HashMap<FactKind, FactSourceCounts>,
}

impl Default for ClassificationStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassificationStats {
    pub fn new() -> Self {
        let colors = Color::iter().map(|color| (color, 0)).collect();
        let facts = FactKind::iter()
            .map(|kind| (kind, FactSourceCounts::default()))
            .collect();
        Self {
            colors,
            unclassified: 0,
            facts,
        }
    }

    /// Records one enriched record, given its facts before and after
    /// reconciliation.
    pub fn record(&mut self, trusted: &Facts, reconciled: &Facts, color: Option<Color>) {
        match color {
            Some(color) => *self.colors.entry(color).or_insert(0) += 1,
            None => self.unclassified += 1,
        }

        for kind in FactKind::iter() {
            let counts = self.facts.entry(kind).or_default();
            if kind.is_known(trusted) {
                counts.trusted += 1;
            } else if kind.is_known(reconciled) {
                counts.inferred += 1;
            } else {
                counts.unknown += 1;
            }
        }
    }

    pub fn color_count(&self, color: Color) -> usize {
        self.colors.get(&color).copied().unwrap_or(0)
    }

    /// Records whose facts were insufficient for a category.
    pub fn unclassified(&self) -> usize {
        self.unclassified
    }

    pub fn fact_counts(&self, kind: FactKind) -> FactSourceCounts {
        self.facts.get(&kind).copied().unwrap_or_default()
    }

    pub fn total_classified(&self) -> usize {
        self.colors.values().sum()
    }

    pub fn total(&self) -> usize {
        self.total_classified() + self.unclassified
    }
}
