//! Fact extraction from Italian-language advisory text.
//!
//! Every function here is total: empty or unmatched text yields an unknown
//! fact, never an error. Inference only fills gaps; reconciling with trusted
//! values happens in [`crate::pipeline`].

mod rules;

pub use rules::{
    Rule, RuleSet, RuleSpec, E_AUTH_RULE_SPECS, VACCINE_RULE_SPECS, VISA_DAYS_PATTERN,
    VISA_RULE_SPECS,
};

use rules::{E_AUTH_RULES, VACCINE_RULES, VISA_DAYS, VISA_RULES};

use crate::models::{Facts, Tristate};

/// Returns the lowercased text, or `None` when there is nothing to match.
fn normalize(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Infers whether a visa is required from the visa/entry text.
///
/// "Not required" phrasings and "senza visto" give `False`; any other mention
/// of "visto" gives `True`.
pub fn infer_visa_required(text: &str) -> Tristate {
    normalize(text)
        .map(|lower| VISA_RULES.evaluate(&lower))
        .unwrap_or(Tristate::Unknown)
}

/// Extracts the first "N giorni" / "N g" figure from the visa/entry text.
pub fn infer_visa_free_days(text: &str) -> Option<u32> {
    if text.trim().is_empty() {
        return None;
    }
    let re = VISA_DAYS.as_ref()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Infers whether an electronic authorization (ESTA, ETA, e-visa, ...) is
/// required. Returns `True` or `Unknown`, never `False`.
pub fn infer_e_authorization_required(text: &str) -> Tristate {
    normalize(text)
        .map(|lower| E_AUTH_RULES.evaluate(&lower))
        .unwrap_or(Tristate::Unknown)
}

/// Infers whether vaccinations are mandatory from the health text.
pub fn infer_vaccines_required(text: &str) -> Tristate {
    normalize(text)
        .map(|lower| VACCINE_RULES.evaluate(&lower))
        .unwrap_or(Tristate::Unknown)
}

/// Runs every inference rule. Absent text is treated as empty.
pub fn extract_facts(visa_text: Option<&str>, health_text: Option<&str>) -> Facts {
    let visa_text = visa_text.unwrap_or_default();
    let health_text = health_text.unwrap_or_default();

    Facts {
        visa_required: infer_visa_required(visa_text),
        visa_free_days: infer_visa_free_days(visa_text),
        e_authorization_required: infer_e_authorization_required(visa_text),
        vaccines_required: infer_vaccines_required(health_text),
        ..Facts::default()
    }
}
