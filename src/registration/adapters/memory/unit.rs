//! In-memory registrable unit with injectable failures.

use super::{UnitAction, UnitJournal};
use crate::registration::{
    domain::UnitName,
    ports::{RegistrableUnit, UnitError, UnitResult},
};
use std::sync::{Arc, RwLock};

/// In-memory registrable unit.
///
/// The unit models a subsystem without touching any real resource. It tracks
/// whether it is registered, counts calls, and records each call in a shared
/// [`UnitJournal`]. Clones share registration state, so a test can keep a
/// handle after moving the unit into a sequence.
///
/// Registering an already registered unit, or unregistering one that is not
/// registered, is rejected with [`UnitError::AlreadyRegistered`] or
/// [`UnitError::NotRegistered`].
#[derive(Debug, Clone)]
pub struct InMemoryUnit {
    name: UnitName,
    journal: UnitJournal,
    register_failure: Option<UnitError>,
    unregister_failure: Option<UnitError>,
    state: Arc<RwLock<InMemoryUnitState>>,
}

#[derive(Debug, Default)]
struct InMemoryUnitState {
    registered: bool,
    register_calls: usize,
    unregister_calls: usize,
}

impl InMemoryUnit {
    /// Creates an unregistered unit recording into `journal`.
    #[must_use]
    pub fn new(name: UnitName, journal: UnitJournal) -> Self {
        Self {
            name,
            journal,
            register_failure: None,
            unregister_failure: None,
            state: Arc::default(),
        }
    }

    /// Makes every `register()` call fail with `error`.
    #[must_use]
    pub fn with_register_failure(mut self, error: UnitError) -> Self {
        self.register_failure = Some(error);
        self
    }

    /// Makes every `unregister()` call report `error`.
    ///
    /// The unit still counts as unregistered afterwards: teardown was
    /// attempted and the unit will not be reported as live.
    #[must_use]
    pub fn with_unregister_failure(mut self, error: UnitError) -> Self {
        self.unregister_failure = Some(error);
        self
    }

    /// Returns whether the unit is currently registered.
    ///
    /// # Errors
    ///
    /// Returns unit runtime errors when lock acquisition fails.
    pub fn is_registered(&self) -> UnitResult<bool> {
        Ok(self.read_state()?.registered)
    }

    /// Returns how many times `register()` was called.
    ///
    /// # Errors
    ///
    /// Returns unit runtime errors when lock acquisition fails.
    pub fn register_calls(&self) -> UnitResult<usize> {
        Ok(self.read_state()?.register_calls)
    }

    /// Returns how many times `unregister()` was called.
    ///
    /// # Errors
    ///
    /// Returns unit runtime errors when lock acquisition fails.
    pub fn unregister_calls(&self) -> UnitResult<usize> {
        Ok(self.read_state()?.unregister_calls)
    }

    fn read_state(&self) -> UnitResult<std::sync::RwLockReadGuard<'_, InMemoryUnitState>> {
        self.state
            .read()
            .map_err(|err| UnitError::runtime(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> UnitResult<std::sync::RwLockWriteGuard<'_, InMemoryUnitState>> {
        self.state
            .write()
            .map_err(|err| UnitError::runtime(std::io::Error::other(err.to_string())))
    }

    fn check_register(&self, state: &InMemoryUnitState) -> UnitResult<()> {
        if let Some(error) = &self.register_failure {
            return Err(error.clone());
        }
        if state.registered {
            return Err(UnitError::AlreadyRegistered(self.name.clone()));
        }
        Ok(())
    }

    fn check_unregister(&self, state: &InMemoryUnitState) -> UnitResult<()> {
        if !state.registered {
            return Err(UnitError::NotRegistered(self.name.clone()));
        }
        Ok(())
    }
}

impl RegistrableUnit for InMemoryUnit {
    fn name(&self) -> &UnitName {
        &self.name
    }

    // State changes only once the call is journalled, so a journal error
    // leaves the unit as it was.
    fn register(&self) -> UnitResult<()> {
        let mut state = self.write_state()?;
        state.register_calls += 1;
        let outcome = self.check_register(&state);
        self.journal
            .record(&self.name, UnitAction::Register, outcome.is_ok())?;
        outcome?;
        state.registered = true;
        Ok(())
    }

    fn unregister(&self) -> UnitResult<()> {
        let mut state = self.write_state()?;
        state.unregister_calls += 1;
        let outcome = self
            .check_unregister(&state)
            .and_then(|()| self.unregister_failure.clone().map_or(Ok(()), Err));
        self.journal
            .record(&self.name, UnitAction::Unregister, outcome.is_ok())?;
        state.registered = false;
        outcome
    }
}
