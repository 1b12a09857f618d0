//! Then steps for ordered registration BDD scenarios.

use super::world::{RegistrationWorld, parse_names};
use bringup::registration::{
    adapters::memory::UnitAction,
    ports::RegistrableUnit,
    services::{CoordinatorError, RegistrationFailure},
};
use eyre::WrapErr;
use rstest_bdd_macros::then;

fn registration_failure(world: &RegistrationWorld) -> Result<&RegistrationFailure, eyre::Report> {
    match world.last_start_result.as_ref() {
        Some(Err(CoordinatorError::Registration(failure))) => Ok(failure),
        other => Err(eyre::eyre!("expected a registration failure, got {other:?}")),
    }
}

fn expect_calls(
    world: &RegistrationWorld,
    action: UnitAction,
    names: &str,
) -> Result<(), eyre::Report> {
    let expected = parse_names(names)?;
    let actual = world.calls(action)?;
    if actual != expected {
        return Err(eyre::eyre!(
            "expected {action:?} calls {expected:?}, got {actual:?}"
        ));
    }
    Ok(())
}

#[then("start succeeds")]
fn start_succeeds(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    match world.last_start_result.as_ref() {
        Some(Ok(())) => Ok(()),
        other => Err(eyre::eyre!("expected start to succeed, got {other:?}")),
    }
}

#[then(r#"start fails naming unit "{name}""#)]
fn start_fails_naming_unit(world: &RegistrationWorld, name: String) -> Result<(), eyre::Report> {
    let failure = registration_failure(world)?;
    if failure.unit().as_str() != name {
        return Err(eyre::eyre!(
            "expected failure on unit '{name}', got '{}'",
            failure.unit()
        ));
    }
    Ok(())
}

#[then(r#"register was called on "{names}" in that order"#)]
fn register_called_in_order(world: &RegistrationWorld, names: String) -> Result<(), eyre::Report> {
    expect_calls(world, UnitAction::Register, &names)
}

#[then(r#"unregister was called on "{names}" in that order"#)]
fn unregister_called_in_order(
    world: &RegistrationWorld,
    names: String,
) -> Result<(), eyre::Report> {
    expect_calls(world, UnitAction::Unregister, &names)
}

#[then("unregister was never called")]
fn unregister_never_called(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    let calls = world.calls(UnitAction::Unregister)?;
    if !calls.is_empty() {
        return Err(eyre::eyre!("expected no unregister calls, got {calls:?}"));
    }
    Ok(())
}

#[then("every unit is registered")]
fn every_unit_registered(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    for unit in &world.units {
        if !unit.is_registered().wrap_err("unit state should be readable")? {
            return Err(eyre::eyre!("expected unit '{}' to be registered", unit.name()));
        }
    }
    Ok(())
}

#[then("no unit remains registered")]
fn no_unit_remains_registered(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    for unit in &world.units {
        if unit.is_registered().wrap_err("unit state should be readable")? {
            return Err(eyre::eyre!("unit '{}' is still registered", unit.name()));
        }
    }
    Ok(())
}

#[then("the rollback reported {count:usize} unregistration failures")]
fn rollback_reported_failures(
    world: &RegistrationWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    let failures = registration_failure(world)?.rollback().failures().len();
    if failures != count {
        return Err(eyre::eyre!(
            "expected {count} rollback failures, got {failures}"
        ));
    }
    Ok(())
}
