//! Ordered, immutable list of registrable units.

use crate::registration::{
    domain::{RegistrationDomainError, UnitName},
    ports::RegistrableUnit,
};
use std::collections::HashSet;
use std::fmt;

/// Ordered sequence of units fixed at construction time.
///
/// Position in the sequence defines the forward registration order; teardown
/// always walks the same positions in reverse.
pub struct RegistrationSequence {
    units: Vec<Box<dyn RegistrableUnit>>,
}

impl RegistrationSequence {
    /// Creates a sequence from units in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationDomainError::DuplicateUnitName`] when two units
    /// share a name.
    pub fn new(units: Vec<Box<dyn RegistrableUnit>>) -> Result<Self, RegistrationDomainError> {
        let mut seen = HashSet::with_capacity(units.len());
        for unit in &units {
            if !seen.insert(unit.name()) {
                return Err(RegistrationDomainError::DuplicateUnitName(
                    unit.name().clone(),
                ));
            }
        }
        Ok(Self { units })
    }

    /// Starts building a sequence one unit at a time.
    #[must_use]
    pub fn builder() -> RegistrationSequenceBuilder {
        RegistrationSequenceBuilder::default()
    }

    /// Returns the number of units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns whether the sequence has no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterates units in registration order.
    #[must_use]
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = &(dyn RegistrableUnit + 'static)> + ExactSizeIterator
    {
        self.units.iter().map(|unit| &**unit)
    }

    /// Iterates unit names in registration order.
    #[must_use]
    pub fn names(&self) -> impl DoubleEndedIterator<Item = &UnitName> + ExactSizeIterator {
        self.units.iter().map(RegistrableUnit::name)
    }
}

impl fmt::Debug for RegistrationSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Builder collecting units in registration order.
#[derive(Default)]
pub struct RegistrationSequenceBuilder {
    units: Vec<Box<dyn RegistrableUnit>>,
}

impl RegistrationSequenceBuilder {
    /// Appends a unit after every unit added so far.
    #[must_use]
    pub fn unit(mut self, unit: impl RegistrableUnit + 'static) -> Self {
        self.units.push(Box::new(unit));
        self
    }

    /// Finishes the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationDomainError::DuplicateUnitName`] when two units
    /// share a name.
    pub fn build(self) -> Result<RegistrationSequence, RegistrationDomainError> {
        RegistrationSequence::new(self.units)
    }
}
