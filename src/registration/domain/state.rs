//! Per-unit registration state.

use super::ParseUnitStateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registration state of a single unit.
///
/// A unit only ever moves `unregistered -> registered -> unregistered`; it
/// may not skip a state or be driven backward twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitState {
    /// The unit is down. Every unit starts here.
    #[default]
    Unregistered,
    /// The unit's `register()` succeeded and it has not been torn down since.
    Registered,
}

impl UnitState {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unregistered => "unregistered",
            Self::Registered => "registered",
        }
    }

    /// Returns whether transition to `target` is allowed.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Unregistered, Self::Registered) | (Self::Registered, Self::Unregistered)
        )
    }
}

impl fmt::Display for UnitState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitState {
    type Error = ParseUnitStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "unregistered" => Ok(Self::Unregistered),
            "registered" => Ok(Self::Registered),
            _ => Err(ParseUnitStateError(value.to_owned())),
        }
    }
}
