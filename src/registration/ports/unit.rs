//! Registration contract implemented by every subsystem the coordinator drives.

use crate::registration::domain::UnitName;
use std::sync::Arc;
use thiserror::Error;

/// Result type for unit register and unregister operations.
pub type UnitResult<T> = Result<T, UnitError>;

/// A subsystem that can be brought up and torn down.
///
/// Implementations must uphold the following contract:
///
/// - A failed [`register`](Self::register) leaves no persistent side effect,
///   so the coordinator never unregisters a unit whose registration failed.
/// - [`unregister`](Self::unregister) fully undoes whatever a successful
///   `register` set up. It is only ever called after such a success.
///
/// Both operations block until complete.
pub trait RegistrableUnit: Send {
    /// Returns the unit's diagnostic name.
    fn name(&self) -> &UnitName;

    /// Brings the unit up.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError`] when the subsystem rejects registration.
    fn register(&self) -> UnitResult<()>;

    /// Tears the unit down.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError`] when teardown reports a problem. The coordinator
    /// records such failures but keeps unwinding the remaining units.
    fn unregister(&self) -> UnitResult<()>;
}

impl<U: RegistrableUnit + ?Sized> RegistrableUnit for Box<U> {
    fn name(&self) -> &UnitName {
        (**self).name()
    }

    fn register(&self) -> UnitResult<()> {
        (**self).register()
    }

    fn unregister(&self) -> UnitResult<()> {
        (**self).unregister()
    }
}

/// Errors reported by registrable units.
#[derive(Debug, Clone, Error)]
pub enum UnitError {
    /// The subsystem rejected its configuration or arguments.
    #[error("registration rejected: {0}")]
    Rejected(String),

    /// The subsystem is temporarily held by something else.
    #[error("subsystem busy: {0}")]
    Busy(String),

    /// The backing device or service is not present.
    #[error("subsystem unavailable: {0}")]
    Unavailable(String),

    /// The unit is already registered.
    #[error("unit {0} is already registered")]
    AlreadyRegistered(UnitName),

    /// The unit is not registered.
    #[error("unit {0} is not registered")]
    NotRegistered(UnitName),

    /// Generic runtime failure.
    #[error("unit runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl UnitError {
    /// Wraps a runtime error from a unit implementation.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }

    /// Returns the negative errno-style status a host reports for this error.
    #[must_use]
    pub const fn status_code(&self) -> i32 {
        let errno = match self {
            Self::Rejected(_) => libc::EINVAL,
            Self::Busy(_) => libc::EBUSY,
            Self::Unavailable(_) => libc::ENODEV,
            Self::AlreadyRegistered(_) => libc::EEXIST,
            Self::NotRegistered(_) => libc::ENOENT,
            Self::Runtime(_) => libc::EIO,
        };
        -errno
    }
}
