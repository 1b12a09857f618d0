//! Shared, ordered record of unit calls.

use crate::registration::{
    domain::UnitName,
    ports::{UnitError, UnitResult},
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Operation recorded in a [`UnitJournal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitAction {
    /// A `register()` call.
    Register,
    /// An `unregister()` call.
    Unregister,
}

/// One recorded call and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unit the call was made on.
    pub unit: UnitName,
    /// Operation invoked.
    pub action: UnitAction,
    /// Whether the operation returned `Ok`.
    pub succeeded: bool,
}

/// Call journal shared between every unit of a sequence.
///
/// Cloning the journal yields another handle to the same entries, so the
/// cross-unit call order can be inspected after a pass.
#[derive(Debug, Clone, Default)]
pub struct UnitJournal {
    entries: Arc<RwLock<Vec<JournalEntry>>>,
}

impl UnitJournal {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded call in order.
    ///
    /// # Errors
    ///
    /// Returns unit runtime errors when lock acquisition fails.
    pub fn entries(&self) -> UnitResult<Vec<JournalEntry>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| UnitError::runtime(std::io::Error::other(err.to_string())))?;
        Ok(entries.clone())
    }

    /// Returns the units on which `action` was invoked, in call order,
    /// including calls that failed.
    ///
    /// # Errors
    ///
    /// Returns unit runtime errors when lock acquisition fails.
    pub fn calls(&self, action: UnitAction) -> UnitResult<Vec<UnitName>> {
        Ok(self
            .entries()?
            .into_iter()
            .filter(|entry| entry.action == action)
            .map(|entry| entry.unit)
            .collect())
    }

    pub(super) fn record(
        &self,
        unit: &UnitName,
        action: UnitAction,
        succeeded: bool,
    ) -> UnitResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| UnitError::runtime(std::io::Error::other(err.to_string())))?;
        entries.push(JournalEntry {
            unit: unit.clone(),
            action,
            succeeded,
        });
        Ok(())
    }

    /// Poisons the entry lock so every later journal call fails.
    #[cfg(test)]
    pub(super) fn poison(&self) {
        let entries = Arc::clone(&self.entries);
        let outcome = std::thread::spawn(move || {
            let _guard = entries.write();
            panic!("journal writer panicked");
        })
        .join();
        assert!(outcome.is_err(), "journal writer should have panicked");
    }
}
