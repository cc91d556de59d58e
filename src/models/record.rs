//! Entry records and the dataset document.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::color::deserialize_color;
use super::facts::deserialize_nullable_facts;
use super::{Color, Facts};

/// One country's entry requirements.
///
/// `country`, `cca3` and the raw text fields come from the fetcher and are
/// never modified here. `extracted` and `color` are filled in by the
/// classification pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    /// Display name
    pub country: String,
    /// ISO 3166-1 alpha-3 code, unique within a dataset
    pub cca3: String,
    /// ISO 3166-1 alpha-2 code
    #[serde(default)]
    pub cca2: Option<String>,
    /// Provenance URL
    #[serde(default)]
    pub source: Option<String>,
    /// Visa / entry documents section, as plain text
    #[serde(default)]
    pub visa_text: Option<String>,
    /// Health / vaccination section, as plain text
    #[serde(default)]
    pub health_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_facts")]
    pub extracted: Facts,
    #[serde(default, deserialize_with = "deserialize_color")]
    pub color: Option<Color>,
    /// Keys not listed above (`fetchedAt`, `error`, ...), passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EntryRecord {
    /// Creates a record as the fetcher would: text populated, facts unknown.
    pub fn new(country: impl Into<String>, cca3: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            cca3: cca3.into(),
            cca2: None,
            source: None,
            visa_text: None,
            health_text: None,
            extracted: Facts::default(),
            color: None,
            extra: Map::new(),
        }
    }

    pub fn with_visa_text(mut self, text: impl Into<String>) -> Self {
        self.visa_text = Some(text.into());
        self
    }

    pub fn with_health_text(mut self, text: impl Into<String>) -> Self {
        self.health_text = Some(text.into());
        self
    }

    pub fn with_extracted(mut self, facts: Facts) -> Self {
        self.extracted = facts;
        self
    }
}

/// The interchange document: a timestamped, ordered list of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDataset {
    /// When the fetcher produced the snapshot, copied through as written.
    /// `None` only when the key is absent; an explicit `null` is kept.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub generated_at: Option<Value>,
    /// Number of records; kept equal to `results.len()` on output
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub results: Vec<EntryRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EntryDataset {
    pub fn new(generated_at: impl Into<String>, results: Vec<EntryRecord>) -> Self {
        Self {
            generated_at: Some(Value::String(generated_at.into())),
            total: results.len(),
            results,
            extra: Map::new(),
        }
    }

    /// The snapshot timestamp as text, for log lines.
    pub fn generated_at_label(&self) -> String {
        match &self.generated_at {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "unknown".to_string(),
        }
    }
}

// Only runs when the key is present, so `null` survives as `Some(Value::Null)`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
