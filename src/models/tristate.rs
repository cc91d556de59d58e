//! Three-valued boolean.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A boolean fact that may be unknown.
///
/// `Unknown` is never treated as `False`. At the JSON boundary the three
/// states are `true`, `false` and `null`; a missing key and any non-boolean
/// value both read as `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tristate {
    /// The fact holds.
    True,
    /// The fact does not hold.
    False,
    /// No evidence either way.
    #[default]
    Unknown,
}

impl Tristate {
    /// Converts an optional boolean, mapping `None` to `Unknown`.
    pub fn from_option(value: Option<bool>) -> Self {
        match value {
            Some(true) => Tristate::True,
            Some(false) => Tristate::False,
            None => Tristate::Unknown,
        }
    }

    /// Returns the known value, if any.
    pub fn as_option(self) -> Option<bool> {
        match self {
            Tristate::True => Some(true),
            Tristate::False => Some(false),
            Tristate::Unknown => None,
        }
    }

    pub fn is_true(self) -> bool {
        self == Tristate::True
    }

    pub fn is_false(self) -> bool {
        self == Tristate::False
    }

    pub fn is_known(self) -> bool {
        self != Tristate::Unknown
    }

    /// Returns `self` if known, otherwise `fallback`.
    ///
    /// A known value is never replaced, so a trusted fact always wins over an
    /// inferred one.
    pub fn or(self, fallback: Tristate) -> Self {
        if self.is_known() {
            self
        } else {
            fallback
        }
    }
}

impl From<bool> for Tristate {
    fn from(value: bool) -> Self {
        Tristate::from_option(Some(value))
    }
}

impl From<Option<bool>> for Tristate {
    fn from(value: Option<bool>) -> Self {
        Tristate::from_option(value)
    }
}

impl std::fmt::Display for Tristate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Tristate::True => "true",
            Tristate::False => "false",
            Tristate::Unknown => "unknown",
        })
    }
}

impl Serialize for Tristate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tristate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Anything other than a JSON boolean carries no information.
        let value = Value::deserialize(deserializer)?;
        Ok(Tristate::from_option(value.as_bool()))
    }
}
