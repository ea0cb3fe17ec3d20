//! Turn-based battle resolution.
//!
//! - `state`: `BattleState` and `Outcome`
//! - `damage`: the damage formula and the per-turn `TurnRoll`
//! - `event`: log events produced by each turn
//! - `resolve`: pure `resolve_turn`
//! - `engine`: `BattleEngine`, which owns the RNG and the one-turn latch
//!
//! ## State Machine
//!
//! ```text
//! InProgress --resolve_turn (defender HP hits 0)--> Winner(attacker)
//! ```
//!
//! Nothing leaves `Winner`.

mod damage;
mod engine;
mod error;
mod event;
mod resolve;
mod state;

pub use damage::{raw_damage, round_half_up, AttackKind, DamageCalc, DefenseKind, TurnRoll};
pub use engine::{BattleEngine, PendingTurn};
pub use error::{BattleError, InvalidState, MissingReason};
pub use event::{TurnEvent, TurnEvents, SEPARATOR};
pub use resolve::{resolve_turn, TurnResolution};
pub use state::{BattleState, Outcome};
