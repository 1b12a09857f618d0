//! Observable status of one unit inside a coordinator.

use super::{RegistrationDomainError, UnitName, UnitState};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Snapshot of a unit's registration state and when it last changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStatus {
    name: UnitName,
    state: UnitState,
    changed_at: DateTime<Utc>,
}

impl UnitStatus {
    /// Creates an `unregistered` status stamped with the current clock time.
    #[must_use]
    pub fn new(name: UnitName, clock: &impl Clock) -> Self {
        Self {
            name,
            state: UnitState::Unregistered,
            changed_at: clock.utc(),
        }
    }

    /// Returns the unit name.
    #[must_use]
    pub const fn name(&self) -> &UnitName {
        &self.name
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> UnitState {
        self.state
    }

    /// Returns when the state last changed.
    #[must_use]
    pub const fn changed_at(&self) -> DateTime<Utc> {
        self.changed_at
    }

    /// Marks the unit as registered.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationDomainError::InvalidStateTransition`] when the
    /// unit is already registered.
    pub fn mark_registered(&mut self, clock: &impl Clock) -> Result<(), RegistrationDomainError> {
        self.transition_to(UnitState::Registered, clock)
    }

    /// Marks the unit as unregistered.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationDomainError::InvalidStateTransition`] when the
    /// unit is not registered.
    pub fn mark_unregistered(&mut self, clock: &impl Clock) -> Result<(), RegistrationDomainError> {
        self.transition_to(UnitState::Unregistered, clock)
    }

    fn transition_to(
        &mut self,
        target: UnitState,
        clock: &impl Clock,
    ) -> Result<(), RegistrationDomainError> {
        if !self.state.can_transition_to(target) {
            return Err(RegistrationDomainError::InvalidStateTransition {
                unit: self.name.clone(),
                from: self.state,
                to: target,
            });
        }
        self.state = target;
        self.changed_at = clock.utc();
        Ok(())
    }
}
