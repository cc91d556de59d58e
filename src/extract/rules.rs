//! Ordered pattern rules for each inferred fact.
//!
//! Each table is a list of `(name, pattern, verdict)` entries evaluated top to
//! bottom against the lowercased text; the first match decides. Adding a new
//! phrasing means adding a row, not changing control flow.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Tristate;

/// Source definition of a rule: name, regex, verdict.
pub type RuleSpec = (&'static str, &'static str, Tristate);

/// "visa not required" phrasings must precede the bare "visto" rule.
pub const VISA_RULE_SPECS: &[RuleSpec] = &[
    (
        "visa_not_required",
        r"(?:non|no) (?:è|e') (?:necessario|richiesto) il visto",
        Tristate::False,
    ),
    ("without_visa", r"senza visto", Tristate::False),
    ("visa_mentioned", r"visto", Tristate::True),
];

/// Electronic authorization schemes. Only `True` rows: no match stays unknown.
pub const E_AUTH_RULE_SPECS: &[RuleSpec] = &[
    ("esta", r"\besta\b", Tristate::True),
    ("eta", r"\beta\b", Tristate::True),
    ("e_visa", r"e-?visa", Tristate::True),
    (
        "electronic_authorization",
        r"autorizzazione elettronica",
        Tristate::True,
    ),
    ("valid_electronically", r"vali[cd][aeio] elettronic", Tristate::True),
];

/// Negative phrasings first: "non obbligatorie" also contains "obbligatorie".
pub const VACCINE_RULE_SPECS: &[RuleSpec] = &[
    ("none", r"nessuna", Tristate::False),
    ("not_mandatory", r"non (?:sono |è |e' )?obbligatori[ae]?", Tristate::False),
    ("mandatory", r"obbligatorie?", Tristate::True),
    ("required", r"required", Tristate::True),
];

/// An integer of up to three ASCII digits followed by "giorni" or "g".
///
/// The closing boundary is ASCII-only, so "30 gè" still counts as a unit.
pub const VISA_DAYS_PATTERN: &str = r"(?i)([0-9]{1,3})\s*(?:giorni|g)(?-u:\b)";

/// A compiled rule.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pattern: Regex,
    pub verdict: Tristate,
}

impl Rule {
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// A rule table; `evaluate` returns the verdict of the first matching rule.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compiles a table. Rows whose pattern does not compile are logged and
    /// skipped.
    pub fn compile(specs: &[RuleSpec]) -> Self {
        let rules = specs
            .iter()
            .filter_map(|&(name, pattern, verdict)| match Regex::new(pattern) {
                Ok(pattern) => Some(Rule {
                    name,
                    pattern,
                    verdict,
                }),
                Err(e) => {
                    log::error!("Failed to compile rule '{}': {}", name, e);
                    None
                }
            })
            .collect();
        Self { rules }
    }

    /// Returns the first matching rule, if any.
    pub fn first_match(&self, text: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.is_match(text))
    }

    /// Returns the verdict of the first matching rule, or `Unknown`.
    pub fn evaluate(&self, text: &str) -> Tristate {
        self.first_match(text)
            .map(|rule| rule.verdict)
            .unwrap_or(Tristate::Unknown)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

pub static VISA_RULES: LazyLock<RuleSet> = LazyLock::new(|| RuleSet::compile(VISA_RULE_SPECS));
pub static E_AUTH_RULES: LazyLock<RuleSet> =
    LazyLock::new(|| RuleSet::compile(E_AUTH_RULE_SPECS));
pub static VACCINE_RULES: LazyLock<RuleSet> =
    LazyLock::new(|| RuleSet::compile(VACCINE_RULE_SPECS));

pub static VISA_DAYS: LazyLock<Option<Regex>> =
    LazyLock::new(|| match Regex::new(VISA_DAYS_PATTERN) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("Failed to compile visa days pattern: {}", e);
            None
        }
    });
