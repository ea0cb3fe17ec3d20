//! # creature-duel
//!
//! A turn-based battle engine for two creatures drawn from a catalog.
//!
//! ## Design Principles
//!
//! 1. **Injected Roster**: The engine never owns the catalog. It receives a
//!    `RosterProvider` and two explicit ids at setup.
//!
//! 2. **Pure Resolution**: `resolve_turn` is a pure function of the battle
//!    state and a `TurnRoll`. All randomness lives in `BattleRng`.
//!
//! 3. **One Turn In Flight**: `BattleEngine` splits a turn into request and
//!    apply so a presentation layer can pace it, and rejects overlapping
//!    requests instead of queueing them.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration
//! - `roster`: Combatant stat blocks and the roster provider seam
//! - `battle`: State, damage math, events, pure resolution, engine
//! - `matchup`: Random matchup selection and rematches

pub mod core;
pub mod roster;
pub mod battle;
pub mod matchup;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    BattleRng, BattleRngState,
    BattleConfig, DamageRules,
};

pub use crate::roster::{
    CombatantId, Combatant, Stats,
    RosterProvider, Roster, FnRoster, RosterError,
};

pub use crate::battle::{
    BattleError, InvalidState, MissingReason,
    AttackKind, DefenseKind, TurnRoll, DamageCalc,
    TurnEvent, TurnEvents,
    BattleState, Outcome,
    resolve_turn, TurnResolution,
    BattleEngine, PendingTurn,
};

pub use crate::matchup::Matchup;
