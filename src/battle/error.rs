//! Battle error types.
//!
//! Two families:
//! - **InvalidState**: a call arrived in the wrong order (battle already
//!   decided, turn already in flight). Recoverable: the call was a no-op.
//! - **MissingCombatant** / **InvalidConfig**: the battle cannot start.

use crate::roster::CombatantId;

/// Why a call was rejected without touching the battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidState {
    #[error("the battle is already decided")]
    BattleOver,

    #[error("a turn is already being resolved")]
    TurnInFlight,

    #[error("no turn is being resolved")]
    NoTurnInFlight,

    #[error("pending turn does not match the turn in flight")]
    StaleRequest,
}

/// Why a combatant could not be used for setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingReason {
    /// The roster has no entry for the id.
    NotFound,
    /// The entry exists but a stat is zero.
    ZeroStat(&'static str),
}

impl std::fmt::Display for MissingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingReason::NotFound => write!(f, "not found in roster"),
            MissingReason::ZeroStat(stat) => write!(f, "{stat} is zero"),
        }
    }
}

/// Errors surfaced by the battle engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("invalid call: {0}")]
    InvalidState(#[from] InvalidState),

    #[error("combatant {id} unavailable: {reason}")]
    MissingCombatant { id: CombatantId, reason: MissingReason },

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

impl BattleError {
    /// True if the failed call left the battle untouched and later calls
    /// may still succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, BattleError::InvalidState(_))
    }
}
