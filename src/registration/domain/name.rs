//! Validated unit name type.

use super::RegistrationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MAX_UNIT_NAME_LEN: usize = 64;

/// Identifier of a registrable unit.
///
/// Names appear in every log line about a unit and in the failure that
/// reports a rejected registration, so they are kept short and shell-safe:
/// `[a-z0-9_]`, at most 64 bytes, e.g. `ssh`, `serial_hub`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UnitName(String);

impl UnitName {
    /// Parses a unit name, trimming surrounding whitespace and folding ASCII
    /// case.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationDomainError::EmptyUnitName`] for blank input,
    /// [`RegistrationDomainError::UnitNameTooLong`] past 64 bytes, and
    /// [`RegistrationDomainError::InvalidUnitName`] for any byte outside
    /// `[a-z0-9_]`.
    pub fn new(value: impl Into<String>) -> Result<Self, RegistrationDomainError> {
        let raw = value.into();
        let name = raw.trim().to_ascii_lowercase();
        match name.len() {
            0 => Err(RegistrationDomainError::EmptyUnitName),
            len if len > MAX_UNIT_NAME_LEN => Err(RegistrationDomainError::UnitNameTooLong(raw)),
            _ if name.bytes().all(is_name_byte) => Ok(Self(name)),
            _ => Err(RegistrationDomainError::InvalidUnitName(raw)),
        }
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const fn is_name_byte(byte: u8) -> bool {
    matches!(byte, b'a'..=b'z' | b'0'..=b'9' | b'_')
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UnitName {
    type Err = RegistrationDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl TryFrom<String> for UnitName {
    type Error = RegistrationDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnitName> for String {
    fn from(value: UnitName) -> Self {
        value.0
    }
}
