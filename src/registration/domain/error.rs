//! Error types for registration domain validation and parsing.

use super::{UnitName, UnitState};
use thiserror::Error;

/// Errors returned while constructing registration domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationDomainError {
    /// The unit name is empty after trimming.
    #[error("unit name must not be empty")]
    EmptyUnitName,

    /// The unit name contains characters outside `[a-z0-9_]`.
    #[error(
        "unit name '{0}' contains invalid characters (only lowercase alphanumeric and underscores allowed)"
    )]
    InvalidUnitName(String),

    /// The unit name exceeds the 64-character limit.
    #[error("unit name exceeds 64 character limit: {0}")]
    UnitNameTooLong(String),

    /// Two units in one sequence share a name.
    #[error("duplicate unit name in registration sequence: {0}")]
    DuplicateUnitName(UnitName),

    /// Transitioning between two unit states is invalid.
    #[error("invalid state transition for unit {unit}: {from} -> {to}")]
    InvalidStateTransition {
        /// Unit whose state was being changed.
        unit: UnitName,
        /// Current state.
        from: UnitState,
        /// Requested target state.
        to: UnitState,
    },
}

/// Error returned while parsing a unit state from its canonical string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown unit state: {0}")]
pub struct ParseUnitStateError(pub String);
