//! Stateful owner of a registration sequence.

use super::{RegistrationFailure, RegistrationSequence, UnwindReport, bring_up, tear_down};
use crate::registration::domain::{RegistrationDomainError, UnitStatus};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned by [`RegistrationCoordinator`].
#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// A unit rejected its registration; the sequence was rolled back.
    #[error(transparent)]
    Registration(#[from] RegistrationFailure),
    /// A unit status transition was invalid.
    #[error(transparent)]
    Domain(#[from] RegistrationDomainError),
    /// `start` was called while the sequence is already up.
    #[error("registration sequence is already up")]
    AlreadyUp,
    /// `stop` was called while the sequence is down.
    #[error("registration sequence is not up")]
    NotUp,
}

/// Result type for coordinator operations.
pub type CoordinatorResult<T> = Result<T, CoordinatorError>;

/// Owns a [`RegistrationSequence`] across its start and stop lifecycle.
///
/// The coordinator tracks whether its sequence is up, so that the sequence is
/// torn down only after a successful start and at most once per start. A
/// coordinator dropped while up tears its sequence down.
pub struct RegistrationCoordinator<C>
where
    C: Clock + Send + Sync,
{
    sequence: RegistrationSequence,
    statuses: Vec<UnitStatus>,
    clock: Arc<C>,
    up: bool,
}

impl<C> RegistrationCoordinator<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a coordinator with every unit unregistered.
    #[must_use]
    pub fn new(sequence: RegistrationSequence, clock: Arc<C>) -> Self {
        let statuses = sequence
            .names()
            .map(|name| UnitStatus::new(name.clone(), &*clock))
            .collect();
        Self {
            sequence,
            statuses,
            clock,
            up: false,
        }
    }

    /// Returns the owned sequence.
    #[must_use]
    pub const fn sequence(&self) -> &RegistrationSequence {
        &self.sequence
    }

    /// Returns per-unit status in registration order.
    #[must_use]
    pub fn statuses(&self) -> &[UnitStatus] {
        &self.statuses
    }

    /// Returns whether every unit is currently registered.
    #[must_use]
    pub const fn is_up(&self) -> bool {
        self.up
    }

    /// Registers every unit in order.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::AlreadyUp`] without touching any unit when
    /// the sequence is already up, or [`CoordinatorError::Registration`] when
    /// a unit fails; in that case the sequence has been rolled back and every
    /// unit is unregistered. [`CoordinatorError::Domain`] means the units came
    /// up but their statuses could not be updated; the coordinator still
    /// counts as up, so [`stop`](Self::stop) or drop tears the sequence down.
    pub fn start(&mut self) -> CoordinatorResult<()> {
        if self.up {
            return Err(CoordinatorError::AlreadyUp);
        }

        bring_up(&self.sequence)?;
        self.up = true;
        for status in &mut self.statuses {
            status.mark_registered(&*self.clock)?;
        }
        debug!(units = self.statuses.len(), "coordinator up");
        Ok(())
    }

    /// Unregisters every unit in reverse order.
    ///
    /// The returned report lists any unit whose unregistration reported an
    /// error; every unit is marked unregistered regardless.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::NotUp`] without touching any unit when the
    /// sequence is not up.
    pub fn stop(&mut self) -> CoordinatorResult<UnwindReport> {
        if !self.up {
            return Err(CoordinatorError::NotUp);
        }

        let report = tear_down(&self.sequence);
        self.up = false;
        for status in &mut self.statuses {
            status.mark_unregistered(&*self.clock)?;
        }
        debug!(units = self.statuses.len(), "coordinator down");
        Ok(report)
    }
}

impl<C> Drop for RegistrationCoordinator<C>
where
    C: Clock + Send + Sync,
{
    fn drop(&mut self) {
        if !self.up {
            return;
        }
        warn!("coordinator dropped while up, tearing down");
        self.up = false;
        let report = tear_down(&self.sequence);
        if !report.is_clean() {
            warn!(
                failed = report.failures().len(),
                "teardown on drop reported unregistration failures"
            );
        }
    }
}
