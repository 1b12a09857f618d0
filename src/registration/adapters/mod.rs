//! Adapter implementations of the registrable unit port.

pub mod memory;

mod function;

pub use function::FnUnit;
