//! Damage math.
//!
//! ```text
//! raw     = (attack - (defense / 3) * 2) / 2
//! floored = max(raw, min_damage)
//! applied = round_half_up(floored)
//! ```
//!
//! The floor compares unrounded values; rounding happens once, at the
//! point the damage is subtracted from HP and shown in the log.

use serde::{Deserialize, Serialize};

use crate::core::DamageRules;
use crate::roster::Stats;

/// Which attack stat a turn used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackKind {
    Base,
    Special,
}

impl std::fmt::Display for AttackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttackKind::Base => write!(f, "Base Attack"),
            AttackKind::Special => write!(f, "Special Attack"),
        }
    }
}

/// Which defense stat a turn used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenseKind {
    Base,
    Special,
}

impl std::fmt::Display for DefenseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefenseKind::Base => write!(f, "Base Defense"),
            DefenseKind::Special => write!(f, "Special Defense"),
        }
    }
}

/// The random decisions of one turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRoll {
    pub use_special_attack: bool,
    pub use_special_defense: bool,
}

impl TurnRoll {
    /// Both draws false.
    #[must_use]
    pub const fn base() -> Self {
        Self {
            use_special_attack: false,
            use_special_defense: false,
        }
    }

    /// Both draws true.
    #[must_use]
    pub const fn special() -> Self {
        Self {
            use_special_attack: true,
            use_special_defense: true,
        }
    }

    #[must_use]
    pub const fn attack_kind(self) -> AttackKind {
        if self.use_special_attack {
            AttackKind::Special
        } else {
            AttackKind::Base
        }
    }

    #[must_use]
    pub const fn defense_kind(self) -> DefenseKind {
        if self.use_special_defense {
            DefenseKind::Special
        } else {
            DefenseKind::Base
        }
    }
}

/// Damage before the floor. May be negative or fractional.
#[must_use]
pub fn raw_damage(attack: u32, defense: u32) -> f64 {
    (f64::from(attack) - (f64::from(defense) / 3.0) * 2.0) / 2.0
}

/// Round half up to a non-negative integer.
#[must_use]
pub fn round_half_up(value: f64) -> u32 {
    // `as` saturates: NaN and negatives become 0, huge values u32::MAX.
    (value + 0.5).floor() as u32
}

/// Full breakdown of one attack.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageCalc {
    pub attack_kind: AttackKind,
    pub attack_value: u32,
    pub defense_kind: DefenseKind,
    pub defense_value: u32,
    /// Formula output before the floor.
    pub raw: f64,
    /// `max(raw, min_damage)`, unrounded.
    pub floored: f64,
    /// Integer damage subtracted from HP.
    pub applied: u32,
}

impl DamageCalc {
    /// Compute the damage `attacker` deals to `defender` for a given roll.
    #[must_use]
    pub fn compute(attacker: &Stats, defender: &Stats, roll: TurnRoll, rules: &DamageRules) -> Self {
        let attack_kind = roll.attack_kind();
        let attack_value = match attack_kind {
            AttackKind::Base => attacker.attack,
            AttackKind::Special => attacker.special_attack,
        };

        let defense_kind = roll.defense_kind();
        let defense_value = match defense_kind {
            DefenseKind::Base => defender.defense,
            DefenseKind::Special => defender.special_defense,
        };

        let raw = raw_damage(attack_value, defense_value);
        let floored = raw.max(rules.min_damage);

        Self {
            attack_kind,
            attack_value,
            defense_kind,
            defense_value,
            raw,
            floored,
            applied: round_half_up(floored),
        }
    }

    /// Whether the floor replaced the formula output.
    #[must_use]
    pub fn was_floored(&self) -> bool {
        self.raw < self.floored
    }
}
