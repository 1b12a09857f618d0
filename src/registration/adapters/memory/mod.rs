//! In-memory unit adapter for coordinator tests and demos.

mod journal;
mod unit;

pub use journal::{JournalEntry, UnitAction, UnitJournal};
pub use unit::InMemoryUnit;
