//! Deterministic random number generation for battles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Checkpointable**: O(1) state capture and restore
//! - **Context streams**: Independent sequences for different purposes
//!   (turn rolls vs matchup picks)
//!
//! ```
//! use creature_duel::core::{BattleRng, DamageRules};
//!
//! let mut rng1 = BattleRng::new(42);
//! let mut rng2 = BattleRng::new(42);
//! let rules = DamageRules::default();
//!
//! assert_eq!(rng1.roll(&rules), rng2.roll(&rules));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::battle::TurnRoll;
use crate::core::DamageRules;

/// Deterministic RNG backing every random decision of a battle.
///
/// Uses ChaCha8 for speed with good statistical quality.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random u32 in the given inclusive range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// Probabilities outside `[0, 1]` are clamped; `NaN` counts as 0.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Draw the two independent special-stat decisions for one turn.
    ///
    /// Attack is drawn before defense.
    pub fn roll(&mut self, rules: &DamageRules) -> TurnRoll {
        let use_special_attack = self.gen_bool(rules.special_attack_chance);
        let use_special_defense = self.gen_bool(rules.special_defense_chance);
        TurnRoll {
            use_special_attack,
            use_special_defense,
        }
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> BattleRngState {
        BattleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &BattleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = BattleRng::new(42);
        let mut rng2 = BattleRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range(1..=1000), rng2.gen_range(1..=1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = BattleRng::new(1);
        let mut rng2 = BattleRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range(1..=1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range(1..=1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = BattleRng::new(42);
        let mut turns = rng.for_context("turns");
        let mut picks = rng.for_context("matchup");

        let seq1: Vec<_> = (0..10).map(|_| turns.gen_range(1..=1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| picks.gen_range(1..=1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roll_extremes() {
        let mut rng = BattleRng::new(3);

        let never = DamageRules {
            special_attack_chance: 0.0,
            special_defense_chance: 0.0,
            ..DamageRules::default()
        };
        for _ in 0..50 {
            assert_eq!(rng.roll(&never), TurnRoll::base());
        }

        let always = DamageRules {
            special_attack_chance: 1.0,
            special_defense_chance: 1.0,
            ..DamageRules::default()
        };
        for _ in 0..50 {
            assert_eq!(rng.roll(&always), TurnRoll::special());
        }
    }

    #[test]
    fn test_roll_frequency_near_quarter() {
        let mut rng = BattleRng::new(1234);
        let rules = DamageRules::default();
        let n = 20_000;

        let (mut atk, mut def) = (0, 0);
        for _ in 0..n {
            let roll = rng.roll(&rules);
            atk += roll.use_special_attack as u32;
            def += roll.use_special_defense as u32;
        }

        let atk_rate = f64::from(atk) / f64::from(n);
        let def_rate = f64::from(def) / f64::from(n);
        assert!((atk_rate - 0.25).abs() < 0.02, "attack rate {atk_rate}");
        assert!((def_rate - 0.25).abs() < 0.02, "defense rate {def_rate}");
    }

    #[test]
    fn test_gen_bool_clamps() {
        let mut rng = BattleRng::new(5);
        assert!(rng.gen_bool(2.0));
        assert!(!rng.gen_bool(-1.0));
    }

    #[test]
    fn test_nan_probability_never_fires() {
        let mut rng = BattleRng::new(5);
        for _ in 0..20 {
            assert!(!rng.gen_bool(f64::NAN));
        }

        let rules = DamageRules {
            special_attack_chance: f64::NAN,
            special_defense_chance: f64::NAN,
            ..DamageRules::default()
        };
        assert_eq!(rng.roll(&rules), TurnRoll::base());
    }

    #[test]
    fn test_state_restore() {
        let mut rng = BattleRng::new(42);
        let rules = DamageRules::default();

        for _ in 0..37 {
            rng.roll(&rules);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll(&rules)).collect();

        let mut restored = BattleRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll(&rules)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = BattleRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: BattleRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
