//! Display categories.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum_macros::EnumIter as EnumIterMacro;

/// The five-way category summarizing a country's entry burden.
///
/// "Unknown" is not a variant: the classifier returns `Option<Color>` and
/// `None` (serialized as `null`) means there was not enough evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumIterMacro)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// No visa, no e-authorization, no mandatory vaccines
    Green,
    /// No visa but an electronic authorization
    Blue,
    /// Electronic authorization and mandatory vaccines
    Yellow,
    /// Visa required
    Red,
    /// Visa and mandatory vaccines required
    Purple,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Purple => "purple",
        }
    }

    /// Parses a lowercase label as written in the document.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            "yellow" => Some(Color::Yellow),
            "red" => Some(Color::Red),
            "purple" => Some(Color::Purple),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads a `color` field, treating unrecognized labels as unset.
///
/// The stored color is always recomputed, so a stale or foreign label in the
/// input must not make the whole document unreadable.
pub(crate) fn deserialize_color<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(Color::from_label))
}
