//! Closure-backed registrable unit.

use crate::registration::{
    domain::UnitName,
    ports::{RegistrableUnit, UnitResult},
};
use std::fmt;

/// Unit whose register and unregister operations are plain closures.
///
/// This lets subsystems with unrelated registration functions share one
/// sequence without each defining a type.
pub struct FnUnit<R, U>
where
    R: Fn() -> UnitResult<()> + Send,
    U: Fn() -> UnitResult<()> + Send,
{
    name: UnitName,
    register: R,
    unregister: U,
}

impl<R, U> FnUnit<R, U>
where
    R: Fn() -> UnitResult<()> + Send,
    U: Fn() -> UnitResult<()> + Send,
{
    /// Creates a unit from its name and its two operations.
    #[must_use]
    pub const fn new(name: UnitName, register: R, unregister: U) -> Self {
        Self {
            name,
            register,
            unregister,
        }
    }
}

impl<R, U> RegistrableUnit for FnUnit<R, U>
where
    R: Fn() -> UnitResult<()> + Send,
    U: Fn() -> UnitResult<()> + Send,
{
    fn name(&self) -> &UnitName {
        &self.name
    }

    fn register(&self) -> UnitResult<()> {
        (self.register)()
    }

    fn unregister(&self) -> UnitResult<()> {
        (self.unregister)()
    }
}

impl<R, U> fmt::Debug for FnUnit<R, U>
where
    R: Fn() -> UnitResult<()> + Send,
    U: Fn() -> UnitResult<()> + Send,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnUnit").field("name", &self.name).finish_non_exhaustive()
    }
}
