//! Battle configuration.
//!
//! `DamageRules` holds the numbers the turn resolution reads. `BattleConfig`
//! adds the seed for the random source and the pacing hint consumers use
//! between requesting and applying a turn.

use serde::{Deserialize, Serialize};

use crate::battle::BattleError;

/// Parameters of the damage formula.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageRules {
    /// Probability that the attacker uses its special attack stat.
    pub special_attack_chance: f64,

    /// Probability that the defender uses its special defense stat.
    pub special_defense_chance: f64,

    /// Floor applied to the unrounded damage of every attack.
    pub min_damage: f64,
}

impl Default for DamageRules {
    fn default() -> Self {
        Self {
            special_attack_chance: 0.25,
            special_defense_chance: 0.25,
            min_damage: 10.0,
        }
    }
}

impl DamageRules {
    /// Check that probabilities are in `[0, 1]` and the floor is at least 1.
    pub fn validate(&self) -> Result<(), BattleError> {
        if !(0.0..=1.0).contains(&self.special_attack_chance) {
            return Err(BattleError::InvalidConfig(
                "special_attack_chance must be within [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.special_defense_chance) {
            return Err(BattleError::InvalidConfig(
                "special_defense_chance must be within [0, 1]",
            ));
        }
        // Below 1 the rounded damage can reach 0 and a battle may never end.
        if !self.min_damage.is_finite() || self.min_damage < 1.0 {
            return Err(BattleError::InvalidConfig(
                "min_damage must be a finite number of at least 1",
            ));
        }
        Ok(())
    }
}

/// Configuration for one battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Damage formula parameters.
    pub rules: DamageRules,

    /// Seed for the battle RNG.
    /// Same seed and same call sequence produce the same battle.
    pub seed: u64,

    /// Suggested delay between requesting and applying a turn, in
    /// milliseconds. The engine never sleeps; consumers read this.
    pub turn_delay_ms: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            rules: DamageRules::default(),
            seed: 42,
            turn_delay_ms: 800,
        }
    }
}

impl BattleConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set both special-stat probabilities.
    #[must_use]
    pub fn with_special_chances(mut self, attack: f64, defense: f64) -> Self {
        self.rules.special_attack_chance = attack;
        self.rules.special_defense_chance = defense;
        self
    }

    /// Set the damage floor.
    #[must_use]
    pub fn with_min_damage(mut self, min_damage: f64) -> Self {
        self.rules.min_damage = min_damage;
        self
    }

    /// Set the pacing hint.
    #[must_use]
    pub fn with_turn_delay_ms(mut self, delay: u64) -> Self {
        self.turn_delay_ms = delay;
        self
    }

    /// Pacing hint as a `Duration`.
    #[must_use]
    pub fn turn_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.turn_delay_ms)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), BattleError> {
        self.rules.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BattleConfig::default();
        assert_eq!(config.rules.special_attack_chance, 0.25);
        assert_eq!(config.rules.special_defense_chance, 0.25);
        assert_eq!(config.rules.min_damage, 10.0);
        assert_eq!(config.seed, 42);
        assert_eq!(config.turn_delay_ms, 800);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BattleConfig::default()
            .with_seed(7)
            .with_special_chances(0.0, 1.0)
            .with_min_damage(5.0)
            .with_turn_delay_ms(0);

        assert_eq!(config.seed, 7);
        assert_eq!(config.rules.special_attack_chance, 0.0);
        assert_eq!(config.rules.special_defense_chance, 1.0);
        assert_eq!(config.rules.min_damage, 5.0);
        assert_eq!(config.turn_delay(), std::time::Duration::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_probability() {
        let config = BattleConfig::default().with_special_chances(1.5, 0.25);
        assert!(matches!(config.validate(), Err(BattleError::InvalidConfig(_))));

        let config = BattleConfig::default().with_special_chances(0.25, -0.1);
        assert!(matches!(config.validate(), Err(BattleError::InvalidConfig(_))));

        let config = BattleConfig::default().with_special_chances(f64::NAN, 0.25);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_floor() {
        assert!(BattleConfig::default().with_min_damage(0.0).validate().is_err());
        assert!(BattleConfig::default().with_min_damage(0.4).validate().is_err());
        assert!(BattleConfig::default().with_min_damage(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = BattleConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BattleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
