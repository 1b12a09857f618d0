//! Outcome of a reverse unregistration pass.

use crate::registration::{domain::UnitName, ports::UnitError};

/// A unit whose `unregister()` reported an error during an unwind.
#[derive(Debug, Clone)]
pub struct UnwindFailure {
    unit: UnitName,
    error: UnitError,
}

impl UnwindFailure {
    /// Returns the unit that failed to unregister cleanly.
    #[must_use]
    pub const fn unit(&self) -> &UnitName {
        &self.unit
    }

    /// Returns the error the unit reported.
    #[must_use]
    pub const fn error(&self) -> &UnitError {
        &self.error
    }
}

/// Record of one rollback or teardown pass.
///
/// Every unit in the pass is attempted exactly once, in order. A unit appears
/// either in [`unregistered`](Self::unregistered) or in
/// [`failures`](Self::failures), never both.
#[derive(Debug, Clone, Default)]
pub struct UnwindReport {
    attempted: Vec<UnitName>,
    unregistered: Vec<UnitName>,
    failures: Vec<UnwindFailure>,
}

impl UnwindReport {
    /// Returns every unit the pass attempted to unregister, in call order.
    #[must_use]
    pub fn attempted(&self) -> &[UnitName] {
        &self.attempted
    }

    /// Returns units that unregistered cleanly, in call order.
    #[must_use]
    pub fn unregistered(&self) -> &[UnitName] {
        &self.unregistered
    }

    /// Returns units whose unregistration reported an error, in call order.
    #[must_use]
    pub fn failures(&self) -> &[UnwindFailure] {
        &self.failures
    }

    /// Returns whether every attempted unregistration succeeded.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn record_success(&mut self, unit: UnitName) {
        self.attempted.push(unit.clone());
        self.unregistered.push(unit);
    }

    pub(crate) fn record_failure(&mut self, unit: UnitName, error: UnitError) {
        self.attempted.push(unit.clone());
        self.failures.push(UnwindFailure { unit, error });
    }
}
