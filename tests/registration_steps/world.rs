//! Shared world state for ordered registration BDD scenarios.

use bringup::registration::{
    adapters::memory::{InMemoryUnit, UnitAction, UnitJournal},
    domain::UnitName,
    ports::RegistrableUnit,
    services::{CoordinatorError, RegistrationCoordinator, RegistrationSequence},
};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Coordinator type used by the BDD world.
pub type TestCoordinator = RegistrationCoordinator<DefaultClock>;

/// Scenario world for ordered registration behaviour tests.
pub struct RegistrationWorld {
    /// Journal shared by every unit in the scenario.
    pub journal: UnitJournal,
    /// Unit handles in registration order; clones share state with the
    /// units owned by the coordinator.
    pub units: Vec<InMemoryUnit>,
    /// Coordinator built on the first start.
    pub coordinator: Option<TestCoordinator>,
    /// Result of the last start attempt.
    pub last_start_result: Option<Result<(), CoordinatorError>>,
}

impl RegistrationWorld {
    /// Creates a world with no units.
    #[must_use]
    pub fn new() -> Self {
        Self {
            journal: UnitJournal::new(),
            units: Vec::new(),
            coordinator: None,
            last_start_result: None,
        }
    }

    /// Replaces the unit with `name` by `update(unit)`.
    ///
    /// # Errors
    ///
    /// Returns an error when no unit has the given name.
    pub fn configure_unit(
        &mut self,
        name: &str,
        update: impl FnOnce(InMemoryUnit) -> InMemoryUnit,
    ) -> Result<(), eyre::Report> {
        let position = self
            .units
            .iter()
            .position(|unit| unit.name().as_str() == name)
            .ok_or_else(|| eyre::eyre!("no unit named '{name}' in scenario world"))?;
        let unit = self.units.remove(position);
        self.units.insert(position, update(unit));
        Ok(())
    }

    /// Returns the coordinator, building it from the configured units on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured units do not form a valid
    /// sequence.
    pub fn coordinator(&mut self) -> Result<&mut TestCoordinator, eyre::Report> {
        if self.coordinator.is_none() {
            let sequence = self
                .units
                .iter()
                .cloned()
                .fold(RegistrationSequence::builder(), |builder, unit| {
                    builder.unit(unit)
                })
                .build()
                .wrap_err("scenario units should form a valid sequence")?;
            self.coordinator = Some(RegistrationCoordinator::new(
                sequence,
                Arc::new(DefaultClock),
            ));
        }
        self.coordinator
            .as_mut()
            .ok_or_else(|| eyre::eyre!("coordinator should exist"))
    }

    /// Returns unit names on which `action` was invoked, in call order.
    ///
    /// # Errors
    ///
    /// Returns an error when the journal cannot be read.
    pub fn calls(&self, action: UnitAction) -> Result<Vec<UnitName>, eyre::Report> {
        self.journal
            .calls(action)
            .wrap_err("journal should be readable")
    }
}

impl Default for RegistrationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RegistrationWorld {
    RegistrationWorld::default()
}

/// Parses a comma-separated list of unit names.
///
/// # Errors
///
/// Returns an error when any name is invalid.
pub fn parse_names(names: &str) -> Result<Vec<UnitName>, eyre::Report> {
    names
        .split(',')
        .map(|raw| UnitName::new(raw).wrap_err_with(|| format!("invalid unit name '{raw}'")))
        .collect()
}
