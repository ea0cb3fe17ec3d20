//! Combatants and the roster seam.
//!
//! The engine never fetches or caches catalog data. Callers hand it a
//! `RosterProvider` and the ids of the two creatures to battle.

mod combatant;
mod registry;

pub use combatant::{Combatant, CombatantId, Stats};
pub use registry::{FnRoster, Roster, RosterError, RosterProvider};
