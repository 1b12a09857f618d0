//! Process-boundary entry points for a registration sequence.
//!
//! A host environment (a module loader, a service supervisor, a `main`
//! function) sees exactly two hooks: [`HostModule::init`], which reports a
//! status code, and [`HostModule::exit`], which reports nothing.

use super::{CoordinatorError, RegistrationCoordinator};
use mockable::Clock;
use std::fmt;
use tracing::{error, info, warn};

/// Status code reported by [`HostModule::init`].
///
/// Zero means success; failures are negative errno-style codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostStatus(i32);

impl HostStatus {
    /// Status reported when every unit registered.
    pub const SUCCESS: Self = Self(0);

    /// Wraps a raw host status code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        Self(code)
    }

    /// Returns the raw status code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Returns whether the status denotes success.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl From<&CoordinatorError> for HostStatus {
    fn from(err: &CoordinatorError) -> Self {
        let code = match err {
            CoordinatorError::Registration(failure) => failure.error().status_code(),
            CoordinatorError::Domain(_) => -libc::EINVAL,
            CoordinatorError::AlreadyUp => -libc::EBUSY,
            CoordinatorError::NotUp => -libc::ENOENT,
        };
        Self(code)
    }
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host-facing wrapper exposing start and stop hooks.
pub struct HostModule<C>
where
    C: Clock + Send + Sync,
{
    coordinator: RegistrationCoordinator<C>,
}

impl<C> HostModule<C>
where
    C: Clock + Send + Sync,
{
    /// Wraps a coordinator.
    #[must_use]
    pub const fn new(coordinator: RegistrationCoordinator<C>) -> Self {
        Self { coordinator }
    }

    /// Returns the wrapped coordinator.
    #[must_use]
    pub const fn coordinator(&self) -> &RegistrationCoordinator<C> {
        &self.coordinator
    }

    /// Start hook: registers every unit.
    ///
    /// Returns [`HostStatus::SUCCESS`] when the whole sequence is up. On
    /// failure the sequence is fully down again and the status carries the
    /// failing unit's error code.
    pub fn init(&mut self) -> HostStatus {
        match self.coordinator.start() {
            Ok(()) => {
                info!("init complete");
                HostStatus::SUCCESS
            }
            Err(err) => {
                let status = HostStatus::from(&err);
                error!(error = %err, %status, "init failed");
                status
            }
        }
    }

    /// Stop hook: unregisters every unit.
    ///
    /// Unregistration failures and a stop without a prior successful
    /// [`init`](Self::init) are logged and otherwise ignored.
    pub fn exit(&mut self) {
        match self.coordinator.stop() {
            Ok(report) if report.is_clean() => info!("exit complete"),
            Ok(report) => {
                for failure in report.failures() {
                    warn!(unit = %failure.unit(), error = %failure.error(), "unit failed to unregister");
                }
                warn!(failed = report.failures().len(), "exit complete with unregistration failures");
            }
            Err(err) => warn!(error = %err, "exit ignored"),
        }
    }
}
