//! Port contracts for registrable subsystems.

mod unit;

pub use unit::{RegistrableUnit, UnitError, UnitResult};
