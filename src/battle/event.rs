//! Battle log events.
//!
//! Every event renders to one log line via `Display`. The order in which a
//! turn emits them is fixed: attack declared, defense declared, damage
//! dealt, separator, and a victory line if the defender fell.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::damage::{AttackKind, DefenseKind};
use crate::core::Side;

/// Separator line written after every turn.
pub const SEPARATOR: &str = "───────────";

/// Events of a single turn. Five fit inline.
pub type TurnEvents = SmallVec<[TurnEvent; 5]>;

/// One entry of the battle log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// Emitted once at battle start.
    FirstMove { side: Side, name: String },

    AttackDeclared {
        side: Side,
        name: String,
        kind: AttackKind,
        value: u32,
    },

    DefenseDeclared {
        side: Side,
        name: String,
        kind: DefenseKind,
        value: u32,
    },

    DamageDealt {
        attacker: Side,
        name: String,
        defender: Side,
        damage: u32,
        /// Defender HP after the hit.
        defender_hp: u32,
    },

    Separator,

    Victory { side: Side, name: String },
}

impl TurnEvent {
    /// The side this event is about, if any.
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        match self {
            TurnEvent::FirstMove { side, .. }
            | TurnEvent::AttackDeclared { side, .. }
            | TurnEvent::DefenseDeclared { side, .. }
            | TurnEvent::Victory { side, .. } => Some(*side),
            TurnEvent::DamageDealt { attacker, .. } => Some(*attacker),
            TurnEvent::Separator => None,
        }
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        matches!(self, TurnEvent::Victory { .. })
    }
}

impl std::fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnEvent::FirstMove { name, .. } => write!(f, "{name} is faster and attacks first!"),
            TurnEvent::AttackDeclared { name, kind, value, .. } => {
                write!(f, "{name} uses {kind} ({value})")
            }
            TurnEvent::DefenseDeclared { name, kind, value, .. } => {
                write!(f, "{name} uses {kind} ({value})")
            }
            TurnEvent::DamageDealt { name, damage, .. } => write!(f, "{name} deals {damage} damage!"),
            TurnEvent::Separator => f.write_str(SEPARATOR),
            TurnEvent::Victory { name, .. } => write!(f, "{name} wins the battle!"),
        }
    }
}
