//! Application services for ordered registration, rollback, and teardown.

mod coordinator;
mod host;
mod report;
mod sequence;
mod sequencer;

pub use coordinator::{CoordinatorError, CoordinatorResult, RegistrationCoordinator};
pub use host::{HostModule, HostStatus};
pub use report::{UnwindFailure, UnwindReport};
pub use sequence::{RegistrationSequence, RegistrationSequenceBuilder};
pub use sequencer::{RegistrationFailure, bring_up, tear_down};
