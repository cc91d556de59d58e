//! Per-country facts (the `extracted` object).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::Tristate;

/// The four facts describing a country's entry requirements.
///
/// Every field may be unknown. `visa_free_days` is carried for display and
/// never feeds the classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facts {
    #[serde(default)]
    pub visa_required: Tristate,
    #[serde(default, deserialize_with = "deserialize_days")]
    pub visa_free_days: Option<u32>,
    #[serde(default)]
    pub e_authorization_required: Tristate,
    #[serde(default)]
    pub vaccines_required: Tristate,
    /// Keys not listed above, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Facts {
    /// Returns true when none of the four facts is known.
    pub fn is_empty(&self) -> bool {
        !self.visa_required.is_known()
            && self.visa_free_days.is_none()
            && !self.e_authorization_required.is_known()
            && !self.vaccines_required.is_known()
    }
}

/// Reads `visaFreeDays`; anything that is not a non-negative integer in range
/// is treated as unknown.
fn deserialize_days<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|days| u32::try_from(days).ok()))
}

/// Reads the `extracted` object; `null` means every fact is unknown.
pub(crate) fn deserialize_nullable_facts<'de, D>(deserializer: D) -> Result<Facts, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Facts>::deserialize(deserializer)?.unwrap_or_default())
}
