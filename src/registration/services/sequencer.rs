//! Forward registration with fail-fast rollback, and reverse teardown.
//!
//! Both passes are single-threaded and blocking: each `register()` or
//! `unregister()` call runs to completion before the next unit is touched.

use super::{RegistrationSequence, UnwindReport};
use crate::registration::{
    domain::UnitName,
    ports::{RegistrableUnit, UnitError},
};
use thiserror::Error;
use tracing::{error, info, warn};

/// A unit rejected its registration during [`bring_up`].
///
/// By the time this error is returned every unit registered before the
/// failing one has been unregistered again, so no unit of the sequence is
/// left registered.
#[derive(Debug, Clone, Error)]
#[error("registration of unit {unit} at position {position} failed: {source}")]
pub struct RegistrationFailure {
    unit: UnitName,
    position: usize,
    source: UnitError,
    rollback: Box<UnwindReport>,
}

impl RegistrationFailure {
    /// Returns the unit whose registration failed.
    #[must_use]
    pub const fn unit(&self) -> &UnitName {
        &self.unit
    }

    /// Returns the zero-based position of the failing unit in its sequence.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the error reported by the failing unit.
    #[must_use]
    pub const fn error(&self) -> &UnitError {
        &self.source
    }

    /// Returns the record of the rollback pass.
    #[must_use]
    pub fn rollback(&self) -> &UnwindReport {
        &self.rollback
    }

    /// Consumes the failure and returns the unit's error.
    #[must_use]
    pub fn into_error(self) -> UnitError {
        self.source
    }
}

/// Registers every unit of `sequence` in order.
///
/// Stops at the first unit whose `register()` fails; later units are never
/// attempted. Every earlier unit is then unregistered in reverse order, each
/// exactly once, even when some of those unregistrations report errors. The
/// failed unit itself is not unregistered.
///
/// An empty sequence succeeds without side effects.
///
/// # Errors
///
/// Returns [`RegistrationFailure`] identifying the failing unit, its error,
/// and the rollback outcome.
pub fn bring_up(sequence: &RegistrationSequence) -> Result<(), RegistrationFailure> {
    info!(units = sequence.len(), "bringing up registration sequence");

    for (position, unit) in sequence.iter().enumerate() {
        if let Err(source) = unit.register() {
            error!(
                unit = %unit.name(),
                position,
                error = %source,
                "unit registration failed, rolling back"
            );
            let rollback = Box::new(unwind(sequence.iter().take(position).rev()));
            return Err(RegistrationFailure {
                unit: unit.name().clone(),
                position,
                source,
                rollback,
            });
        }
        info!(unit = %unit.name(), position, "unit registered");
    }

    info!(units = sequence.len(), "registration sequence up");
    Ok(())
}

/// Unregisters every unit of `sequence` in reverse order.
///
/// The caller guarantees the whole sequence is registered, i.e. a previous
/// [`bring_up`] succeeded and no teardown has happened since. No unit state
/// is consulted. Failing unregistrations are logged and recorded, and the
/// pass continues with the next unit.
pub fn tear_down(sequence: &RegistrationSequence) -> UnwindReport {
    info!(units = sequence.len(), "tearing down registration sequence");
    let report = unwind(sequence.iter().rev());
    info!(
        unregistered = report.unregistered().len(),
        failed = report.failures().len(),
        "registration sequence down"
    );
    report
}

fn unwind<'a>(units: impl Iterator<Item = &'a (dyn RegistrableUnit + 'static)>) -> UnwindReport {
    let mut report = UnwindReport::default();
    for unit in units {
        match unit.unregister() {
            Ok(()) => {
                info!(unit = %unit.name(), "unit unregistered");
                report.record_success(unit.name().clone());
            }
            Err(err) => {
                warn!(unit = %unit.name(), error = %err, "unit unregistration failed, continuing");
                report.record_failure(unit.name().clone(), err);
            }
        }
    }
    report
}
