//! Bringup: ordered subsystem registration.
//!
//! This crate brings a fixed, ordered set of independent subsystems up and
//! takes them down again. Forward registration is fail-fast: the first unit
//! that rejects registration stops the pass, and every unit registered
//! before it is unregistered in strict reverse order before the failure is
//! reported. Shutdown unregisters every unit in reverse order.
//!
//! # Architecture
//!
//! Bringup follows hexagonal architecture principles:
//!
//! - **Domain**: Unit identity and registration state
//! - **Ports**: The contract every registrable subsystem implements
//! - **Adapters**: Closure-backed and in-memory units
//! - **Services**: The registration walk, the coordinator, and host hooks
//!
//! # Modules
//!
//! - [`registration`]: Ordered registration, rollback, and teardown

pub mod registration;
