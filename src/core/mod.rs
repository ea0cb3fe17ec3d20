//! Core engine types: sides, RNG, configuration.
//!
//! This module holds the building blocks that know nothing about combatant
//! stats or damage math.

pub mod side;
pub mod rng;
pub mod config;

pub use side::{Side, SideMap};
pub use rng::{BattleRng, BattleRngState};
pub use config::{BattleConfig, DamageRules};
