//! When steps for ordered registration BDD scenarios.

use super::world::RegistrationWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the sequence is started")]
fn sequence_started(world: &mut RegistrationWorld) -> Result<(), eyre::Report> {
    let result = world.coordinator()?.start();
    world.last_start_result = Some(result);
    Ok(())
}

#[when("the sequence is stopped")]
fn sequence_stopped(world: &mut RegistrationWorld) -> Result<(), eyre::Report> {
    world
        .coordinator()?
        .stop()
        .wrap_err("stop should succeed after a successful start")?;
    Ok(())
}
