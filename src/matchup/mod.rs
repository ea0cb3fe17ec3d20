//! Matchup selection.
//!
//! Picks the two catalog ids for a battle. Catalog ids are assumed to span
//! `1..=roster.len()`, so picks are uniform over that range. After a battle
//! the winner stays and the loser is replaced by a fresh random pick.

use serde::{Deserialize, Serialize};

use crate::core::{BattleRng, Side};
use crate::roster::{CombatantId, RosterProvider};

/// The two combatants of a battle. The player is side A.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matchup {
    pub player: CombatantId,
    pub opponent: CombatantId,
}

impl Matchup {
    pub fn new(player: CombatantId, opponent: CombatantId) -> Self {
        Self { player, opponent }
    }

    /// Random ids for both sides. `None` if the roster is empty.
    pub fn random<R>(roster: &R, rng: &mut BattleRng) -> Option<Self>
    where
        R: RosterProvider + ?Sized,
    {
        let player = random_id(roster, rng)?;
        let opponent = random_id(roster, rng)?;
        Some(Self { player, opponent })
    }

    /// Id on the given side.
    #[must_use]
    pub fn get(&self, side: Side) -> CombatantId {
        match side {
            Side::A => self.player,
            Side::B => self.opponent,
        }
    }

    /// Replace one side with a random pick. Returns `false` (and changes
    /// nothing) if the roster is empty.
    pub fn reroll<R>(&mut self, side: Side, roster: &R, rng: &mut BattleRng) -> bool
    where
        R: RosterProvider + ?Sized,
    {
        let Some(id) = random_id(roster, rng) else {
            return false;
        };
        match side {
            Side::A => self.player = id,
            Side::B => self.opponent = id,
        }
        true
    }

    /// Next matchup after `winner` won: the winner stays, the loser is
    /// replaced.
    #[must_use]
    pub fn rematch<R>(&self, winner: Side, roster: &R, rng: &mut BattleRng) -> Self
    where
        R: RosterProvider + ?Sized,
    {
        let mut next = *self;
        next.reroll(winner.opponent(), roster, rng);
        tracing::debug!(?winner, player = %next.player, opponent = %next.opponent, "rematch");
        next
    }
}

fn random_id<R>(roster: &R, rng: &mut BattleRng) -> Option<CombatantId>
where
    R: RosterProvider + ?Sized,
{
    let len = u32::try_from(roster.len()).unwrap_or(u32::MAX);
    if len == 0 {
        return None;
    }
    Some(CombatantId::new(rng.gen_range(1..=len)))
}
