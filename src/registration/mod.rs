//! Ordered subsystem registration for Bringup.
//!
//! This module brings a fixed, ordered set of independent subsystems up one
//! at a time and tears them down in reverse. A registration failure midway
//! through the forward pass unwinds every unit that already succeeded, in
//! strict reverse order, before the failure is reported. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
