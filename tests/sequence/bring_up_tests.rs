//! Forward registration, fail-fast, and rollback.

use super::helpers::{FIVE_UNITS, Fixture, five_units, name};
use bringup::registration::{
    adapters::memory::UnitAction,
    ports::{RegistrableUnit, UnitError},
    services::bring_up,
};
use rstest::rstest;

#[rstest]
fn every_unit_registers_once_in_order(five_units: Fixture) {
    let sequence = five_units.sequence();

    bring_up(&sequence).expect("bring-up should succeed");

    assert_eq!(five_units.calls(UnitAction::Register), FIVE_UNITS);
    assert!(five_units.calls(UnitAction::Unregister).is_empty());
    assert_eq!(five_units.registered_count(), 5);
}

#[rstest]
#[case::first("a", &[], &[])]
#[case::middle("c", &["a", "b"], &["b", "a"])]
#[case::last("e", &["a", "b", "c", "d"], &["d", "c", "b", "a"])]
fn failure_stops_forward_pass_and_unwinds_prefix(
    #[case] failing: &str,
    #[case] before: &[&str],
    #[case] rollback: &[&str],
) {
    let fixture = Fixture::new(&FIVE_UNITS).failing_register(failing);
    let sequence = fixture.sequence();

    let failure = bring_up(&sequence).expect_err("bring-up should fail");

    let mut attempted: Vec<&str> = before.to_vec();
    attempted.push(failing);
    assert_eq!(fixture.calls(UnitAction::Register), attempted);
    assert_eq!(fixture.calls(UnitAction::Unregister), rollback);
    assert_eq!(failure.unit(), &name(failing));
    assert_eq!(failure.position(), before.len());
    assert!(matches!(failure.error(), UnitError::Rejected(_)));
    assert_eq!(fixture.registered_count(), 0);
    assert!(fixture.max_unregister_calls() <= 1);
}

#[rstest]
fn rollback_attempts_every_prior_success_despite_errors() {
    let fixture = Fixture::new(&FIVE_UNITS)
        .failing_unregister("c")
        .failing_unregister("a")
        .failing_register("d");
    let sequence = fixture.sequence();

    let failure = bring_up(&sequence).expect_err("bring-up should fail");

    assert_eq!(fixture.calls(UnitAction::Unregister), ["c", "b", "a"]);
    let rollback = failure.rollback();
    assert_eq!(rollback.unregistered(), &[name("b")]);
    let failed: Vec<&str> = rollback
        .failures()
        .iter()
        .map(|entry| entry.unit().as_str())
        .collect();
    assert_eq!(failed, ["c", "a"]);
    assert_eq!(fixture.registered_count(), 0);
}

#[rstest]
fn failure_message_identifies_unit_and_cause() {
    let fixture = Fixture::new(&["ssh", "san"]).failing_register("san");

    let failure = bring_up(&fixture.sequence()).expect_err("bring-up should fail");

    let message = failure.to_string();
    assert!(message.contains("san"), "message was: {message}");
    assert!(message.contains("san refused"), "message was: {message}");
}

#[rstest]
fn failed_registration_is_not_retried(five_units: Fixture) {
    let fixture = five_units.failing_register("b");

    bring_up(&fixture.sequence()).expect_err("bring-up should fail");

    let retries = fixture
        .units
        .iter()
        .find(|unit| unit.name().as_str() == "b")
        .map(|unit| unit.register_calls().expect("counter readable"));
    assert_eq!(retries, Some(1));
}
