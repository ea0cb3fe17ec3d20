//! Combatant stat blocks.
//!
//! A `Combatant` is an immutable snapshot of the stats one creature brings
//! into a battle. Current HP is not part of it; the battle state owns that.

use serde::{Deserialize, Serialize};

/// Catalog identifier of a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CombatantId(pub u32);

impl CombatantId {
    /// Create a new combatant ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Battle-relevant base stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Stats {
    /// Every stat set to the same value.
    #[must_use]
    pub const fn uniform(value: u32) -> Self {
        Self {
            hp: value,
            attack: value,
            defense: value,
            special_attack: value,
            special_defense: value,
            speed: value,
        }
    }

    /// Name of the first stat that is zero, if any.
    #[must_use]
    pub fn first_zero(&self) -> Option<&'static str> {
        [
            ("hp", self.hp),
            ("attack", self.attack),
            ("defense", self.defense),
            ("special_attack", self.special_attack),
            ("special_defense", self.special_defense),
            ("speed", self.speed),
        ]
        .into_iter()
        .find(|(_, value)| *value == 0)
        .map(|(name, _)| name)
    }
}

/// One side's creature for one battle.
///
/// ## Example
///
/// ```
/// use creature_duel::roster::{Combatant, CombatantId, Stats};
///
/// let pika = Combatant::new(CombatantId::new(25), "Pikachu", Stats {
///     hp: 35,
///     attack: 55,
///     defense: 40,
///     special_attack: 50,
///     special_defense: 50,
///     speed: 90,
/// });
///
/// assert_eq!(pika.max_hp(), 35);
/// assert_eq!(pika.display_name, "Pikachu");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub display_name: String,
    pub stats: Stats,
}

impl Combatant {
    /// Create a new combatant.
    pub fn new(id: CombatantId, display_name: impl Into<String>, stats: Stats) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            stats,
        }
    }

    #[must_use]
    pub fn max_hp(&self) -> u32 {
        self.stats.hp
    }

    #[must_use]
    pub fn speed(&self) -> u32 {
        self.stats.speed
    }

    /// Whether this combatant moves before `other` when compared first.
    ///
    /// Ties favor `self`.
    #[must_use]
    pub fn outpaces(&self, other: &Combatant) -> bool {
        self.stats.speed >= other.stats.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combatant_id() {
        let id = CombatantId::new(151);
        assert_eq!(id.raw(), 151);
        assert_eq!(format!("{}", id), "#151");
    }

    #[test]
    fn test_first_zero() {
        assert_eq!(Stats::uniform(10).first_zero(), None);

        let stats = Stats {
            defense: 0,
            speed: 0,
            ..Stats::uniform(10)
        };
        assert_eq!(stats.first_zero(), Some("defense"));
    }

    #[test]
    fn test_outpaces_tie_favors_self() {
        let a = Combatant::new(CombatantId::new(1), "A", Stats::uniform(50));
        let b = Combatant::new(CombatantId::new(2), "B", Stats::uniform(50));
        assert!(a.outpaces(&b));
        assert!(b.outpaces(&a));

        let slow = Combatant::new(CombatantId::new(3), "Slow", Stats { speed: 10, ..Stats::uniform(50) });
        assert!(a.outpaces(&slow));
        assert!(!slow.outpaces(&a));
    }
}
