//! Drives an in-memory registration sequence through the host hooks.
//!
//! Usage:
//!
//! ```text
//! bringup [--units ssh,san,vhf,dtx,sid] [--fail-register <unit>] [--fail-unregister <unit>]
//! ```
//!
//! Each name in `--units` becomes an in-memory unit, registered in the given
//! order. `--fail-register` makes one unit reject registration, which
//! exercises the rollback path; `--fail-unregister` makes one unit report an
//! error while being torn down. The process runs the start hook, runs the
//! stop hook when start succeeded, logs the unit call journal as JSON, and
//! exits with the absolute value of the start status.
//!
//! Every flag can also be set through its `BRINGUP_*` environment variable.

use bringup::registration::{
    adapters::memory::{InMemoryUnit, UnitJournal},
    domain::{RegistrationDomainError, UnitName},
    ports::UnitError,
    services::{HostModule, HostStatus, RegistrationCoordinator, RegistrationSequence},
};
use clap::Parser;
use mockable::DefaultClock;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "bringup")]
#[command(about = "Ordered subsystem registration with rollback")]
struct Cli {
    /// Unit names in registration order.
    #[arg(
        long,
        env = "BRINGUP_UNITS",
        value_delimiter = ',',
        default_value = "ssh,san,vhf,dtx,sid"
    )]
    units: Vec<String>,

    /// Unit whose registration is rejected.
    #[arg(long, env = "BRINGUP_FAIL_REGISTER")]
    fail_register: Option<String>,

    /// Unit whose unregistration reports an error.
    #[arg(long, env = "BRINGUP_FAIL_UNREGISTER")]
    fail_unregister: Option<String>,

    /// Log filter directive.
    #[arg(long, env = "BRINGUP_LOG", default_value = "info")]
    log_level: String,
}

/// Errors raised while turning arguments into a sequence.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Domain(#[from] RegistrationDomainError),
    #[error("--{flag} names unknown unit '{unit}'")]
    UnknownUnit { flag: &'static str, unit: UnitName },
}

fn main() -> eyre::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_level.as_str())
        .with_writer(std::io::stderr)
        .init();

    let journal = UnitJournal::new();
    let sequence = build_sequence(&cli, &journal)?;
    let status = run(sequence);

    let entries = journal.entries()?;
    tracing::info!(journal = %serde_json::to_string(&entries)?, "unit call journal");

    Ok(exit_code(status))
}

fn build_sequence(
    cli: &Cli,
    journal: &UnitJournal,
) -> Result<RegistrationSequence, CliError> {
    let names = cli
        .units
        .iter()
        .map(|raw| raw.parse::<UnitName>())
        .collect::<Result<Vec<_>, _>>()?;
    let fail_register = lookup(&names, "fail-register", cli.fail_register.as_deref())?;
    let fail_unregister = lookup(&names, "fail-unregister", cli.fail_unregister.as_deref())?;

    let mut builder = RegistrationSequence::builder();
    for name in names {
        let mut unit = InMemoryUnit::new(name.clone(), journal.clone());
        if fail_register.as_ref() == Some(&name) {
            unit = unit.with_register_failure(UnitError::Unavailable(format!(
                "{name}: injected registration failure"
            )));
        }
        if fail_unregister.as_ref() == Some(&name) {
            unit = unit.with_unregister_failure(UnitError::Busy(format!(
                "{name}: injected unregistration failure"
            )));
        }
        builder = builder.unit(unit);
    }
    Ok(builder.build()?)
}

fn lookup(
    names: &[UnitName],
    flag: &'static str,
    raw: Option<&str>,
) -> Result<Option<UnitName>, CliError> {
    let Some(value) = raw else {
        return Ok(None);
    };
    let unit: UnitName = value.parse()?;
    if names.contains(&unit) {
        Ok(Some(unit))
    } else {
        Err(CliError::UnknownUnit { flag, unit })
    }
}

fn run(sequence: RegistrationSequence) -> HostStatus {
    let mut host = HostModule::new(RegistrationCoordinator::new(
        sequence,
        Arc::new(DefaultClock),
    ));
    let status = host.init();
    if status.is_success() {
        host.exit();
    }
    status
}

fn exit_code(status: HostStatus) -> ExitCode {
    u8::try_from(status.code().unsigned_abs()).map_or(ExitCode::FAILURE, ExitCode::from)
}
