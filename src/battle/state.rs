//! Battle state.
//!
//! `BattleState` is created once both combatants are known and is only
//! changed by turn resolution. Its fields are private so that the HP bounds
//! and the one-way outcome transition cannot be broken from outside.

use serde::{Deserialize, Serialize};

use super::error::{BattleError, MissingReason};
use super::event::TurnEvent;
use crate::core::{Side, SideMap};
use crate::roster::Combatant;

/// Battle outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Winner(Side),
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Outcome::Winner(_))
    }

    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(side),
            Outcome::InProgress => None,
        }
    }
}

/// Complete state of one battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    combatants: SideMap<Combatant>,
    hp: SideMap<u32>,
    turn: Side,
    round: u32,
    outcome: Outcome,
}

impl BattleState {
    /// Start a battle between `a` and `b`.
    ///
    /// Both start at full HP. Side A moves first unless B is strictly faster.
    pub fn new(a: Combatant, b: Combatant) -> Result<Self, BattleError> {
        for combatant in [&a, &b] {
            if let Some(stat) = combatant.stats.first_zero() {
                return Err(BattleError::MissingCombatant {
                    id: combatant.id,
                    reason: MissingReason::ZeroStat(stat),
                });
            }
        }

        let turn = if a.outpaces(&b) { Side::A } else { Side::B };
        let hp = SideMap::from_pair(a.max_hp(), b.max_hp());

        Ok(Self {
            combatants: SideMap::from_pair(a, b),
            hp,
            turn,
            round: 0,
            outcome: Outcome::InProgress,
        })
    }

    /// The event announcing who moves first.
    #[must_use]
    pub fn opening_event(&self) -> TurnEvent {
        TurnEvent::FirstMove {
            side: self.turn,
            name: self.combatant(self.turn).display_name.clone(),
        }
    }

    #[must_use]
    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side]
    }

    #[must_use]
    pub fn hp(&self, side: Side) -> u32 {
        self.hp[side]
    }

    #[must_use]
    pub fn max_hp(&self, side: Side) -> u32 {
        self.combatants[side].max_hp()
    }

    /// Remaining HP as a fraction of max HP, in `[0, 1]`.
    #[must_use]
    pub fn hp_fraction(&self, side: Side) -> f64 {
        let max = self.max_hp(side);
        if max == 0 {
            return 0.0;
        }
        (f64::from(self.hp[side]) / f64::from(max)).clamp(0.0, 1.0)
    }

    /// Side whose turn it is. After a victory this stays on the winner.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Number of resolved turns.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.outcome.winner()
    }

    /// Subtract damage from `side`, stopping at 0. Returns the new HP.
    pub(crate) fn apply_damage(&mut self, side: Side, amount: u32) -> u32 {
        let hp = &mut self.hp[side];
        *hp = hp.saturating_sub(amount);
        *hp
    }

    pub(crate) fn pass_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    pub(crate) fn advance_round(&mut self) {
        self.round += 1;
    }

    pub(crate) fn declare_winner(&mut self, side: Side) {
        debug_assert_eq!(self.outcome, Outcome::InProgress);
        self.outcome = Outcome::Winner(side);
    }
}
