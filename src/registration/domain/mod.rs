//! Domain model for ordered subsystem registration.
//!
//! The registration domain models unit identity and the per-unit
//! `unregistered`/`registered` state machine. The units themselves are
//! external collaborators reached through [`crate::registration::ports`].

mod error;
mod name;
mod state;
mod status;

pub use error::{ParseUnitStateError, RegistrationDomainError};
pub use name::UnitName;
pub use state::UnitState;
pub use status::UnitStatus;
