//! Battle engine.
//!
//! `BattleEngine` owns one battle: its state, the full log and the seeded
//! RNG that produces turn rolls. A turn goes through two steps so that a
//! presentation layer can pace it:
//!
//! 1. `request_turn()` closes the latch and hands out a `PendingTurn`.
//! 2. `apply_turn(pending)` rolls, resolves and reopens the latch.
//!
//! While a turn is pending every other request is rejected, not queued.
//! `cancel_turn(pending)` reopens the latch without touching the battle.
//!
//! ```
//! use creature_duel::battle::{BattleEngine, BattleError, InvalidState};
//! use creature_duel::core::BattleConfig;
//! use creature_duel::roster::{Combatant, CombatantId, Stats};
//!
//! let a = Combatant::new(CombatantId::new(1), "A", Stats::uniform(60));
//! let b = Combatant::new(CombatantId::new(2), "B", Stats::uniform(40));
//! let mut engine = BattleEngine::new(a, b, BattleConfig::default()).unwrap();
//!
//! let pending = engine.request_turn().unwrap();
//! assert_eq!(
//!     engine.request_turn(),
//!     Err(BattleError::InvalidState(InvalidState::TurnInFlight))
//! );
//!
//! let events = engine.apply_turn(pending).unwrap();
//! assert_eq!(events.len(), 4);
//! assert_eq!(engine.state().round(), 1);
//! ```

use super::error::{BattleError, InvalidState, MissingReason};
use super::event::{TurnEvent, TurnEvents};
use super::resolve::resolve_turn;
use super::state::BattleState;
use crate::core::{BattleConfig, BattleRng, BattleRngState, Side};
use crate::matchup::Matchup;
use crate::roster::{Combatant, CombatantId, RosterProvider};

/// Handle for a requested but not yet applied turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a pending turn must be applied or cancelled"]
pub struct PendingTurn {
    ticket: u64,
    attacker: Side,
    round: u32,
}

impl PendingTurn {
    /// Side that will attack when this turn is applied.
    pub fn attacker(&self) -> Side {
        self.attacker
    }

    /// Round counter at the time of the request.
    pub fn round(&self) -> u32 {
        self.round
    }
}

/// Runs a single battle.
#[derive(Clone, Debug)]
pub struct BattleEngine {
    state: BattleState,
    config: BattleConfig,
    rng: BattleRng,
    log: Vec<TurnEvent>,
    in_flight: Option<PendingTurn>,
    next_ticket: u64,
}

impl BattleEngine {
    /// Start a battle between two combatants.
    ///
    /// Emits the opening event naming the side that moves first.
    pub fn new(a: Combatant, b: Combatant, config: BattleConfig) -> Result<Self, BattleError> {
        config.validate()?;
        let state = BattleState::new(a, b)?;
        let opening = state.opening_event();

        tracing::info!(
            a = %state.combatant(Side::A).display_name,
            b = %state.combatant(Side::B).display_name,
            first = %state.turn(),
            seed = config.seed,
            "battle started"
        );

        Ok(Self {
            rng: BattleRng::new(config.seed),
            state,
            config,
            log: vec![opening],
            in_flight: None,
            next_ticket: 0,
        })
    }

    /// Start a battle between two roster entries.
    pub fn from_roster<R>(
        roster: &R,
        a: CombatantId,
        b: CombatantId,
        config: BattleConfig,
    ) -> Result<Self, BattleError>
    where
        R: RosterProvider + ?Sized,
    {
        let lookup = |id: CombatantId| {
            roster.combatant(id).ok_or(BattleError::MissingCombatant {
                id,
                reason: MissingReason::NotFound,
            })
        };
        let a = lookup(a)?;
        let b = lookup(b)?;
        Self::new(a, b, config)
    }

    /// Start a battle for a matchup. The player is side A.
    pub fn from_matchup<R>(roster: &R, matchup: Matchup, config: BattleConfig) -> Result<Self, BattleError>
    where
        R: RosterProvider + ?Sized,
    {
        Self::from_roster(roster, matchup.player, matchup.opponent, config)
    }

    #[must_use]
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Every event since the battle started.
    #[must_use]
    pub fn log(&self) -> &[TurnEvent] {
        &self.log
    }

    /// Whether a turn has been requested and not yet applied or cancelled.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// RNG checkpoint, for reproducing the rest of the battle.
    #[must_use]
    pub fn rng_state(&self) -> BattleRngState {
        self.rng.state()
    }

    /// Close the latch for a new turn.
    pub fn request_turn(&mut self) -> Result<PendingTurn, BattleError> {
        if self.state.is_terminal() {
            return Err(self.reject(InvalidState::BattleOver));
        }
        if self.in_flight.is_some() {
            return Err(self.reject(InvalidState::TurnInFlight));
        }

        let pending = PendingTurn {
            ticket: self.next_ticket,
            attacker: self.state.turn(),
            round: self.state.round(),
        };
        self.next_ticket += 1;
        self.in_flight = Some(pending);
        Ok(pending)
    }

    /// Resolve a requested turn and reopen the latch.
    ///
    /// Returns the new events. The updated state is available from
    /// [`state`](Self::state).
    pub fn apply_turn(&mut self, pending: PendingTurn) -> Result<TurnEvents, BattleError> {
        self.check_pending(pending)?;
        self.in_flight = None;

        let roll = self.rng.roll(&self.config.rules);
        let resolution = resolve_turn(&self.state, roll, &self.config.rules)?;

        tracing::debug!(
            round = resolution.state.round(),
            attacker = %pending.attacker,
            attack = %resolution.damage.attack_kind,
            defense = %resolution.damage.defense_kind,
            raw = resolution.damage.raw,
            applied = resolution.damage.applied,
            "turn resolved"
        );

        self.state = resolution.state;
        self.log.extend(resolution.events.iter().cloned());

        if let Some(winner) = self.state.winner() {
            tracing::info!(
                winner = %self.state.combatant(winner).display_name,
                rounds = self.state.round(),
                "battle decided"
            );
        }

        Ok(resolution.events)
    }

    /// Drop a requested turn without resolving it.
    pub fn cancel_turn(&mut self, pending: PendingTurn) -> Result<(), BattleError> {
        self.check_pending(pending)?;
        self.in_flight = None;
        tracing::debug!(round = pending.round, "turn cancelled");
        Ok(())
    }

    /// Request and apply a turn in one call.
    pub fn resolve_turn(&mut self) -> Result<TurnEvents, BattleError> {
        let pending = self.request_turn()?;
        self.apply_turn(pending)
    }

    /// Resolve turns until one side wins. Returns the winner.
    ///
    /// Terminates because every turn removes at least the configured
    /// minimum damage, which validation keeps at 1 or more.
    pub fn run_to_completion(&mut self) -> Result<Side, BattleError> {
        loop {
            if let Some(winner) = self.state.winner() {
                return Ok(winner);
            }
            self.resolve_turn()?;
        }
    }

    fn check_pending(&self, pending: PendingTurn) -> Result<(), BattleError> {
        match self.in_flight {
            None => Err(self.reject(InvalidState::NoTurnInFlight)),
            Some(current) if current != pending => Err(self.reject(InvalidState::StaleRequest)),
            Some(_) => Ok(()),
        }
    }

    fn reject(&self, reason: InvalidState) -> BattleError {
        tracing::warn!(%reason, round = self.state.round(), "turn call rejected");
        reason.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::state::Outcome;
    use crate::roster::{Roster, Stats};

    fn mon(id: u32, name: &str, stats: Stats) -> Combatant {
        Combatant::new(CombatantId::new(id), name, stats)
    }

    fn base_only() -> BattleConfig {
        BattleConfig::default().with_special_chances(0.0, 0.0)
    }

    #[test]
    fn test_new_logs_opening_event() {
        let engine = BattleEngine::new(
            mon(1, "Slow", Stats { speed: 10, ..Stats::uniform(50) }),
            mon(2, "Fast", Stats { speed: 90, ..Stats::uniform(50) }),
            BattleConfig::default(),
        )
        .unwrap();

        assert_eq!(engine.state().turn(), Side::B);
        assert_eq!(engine.log().len(), 1);
        assert_eq!(engine.log()[0].to_string(), "Fast is faster and attacks first!");
        assert!(!engine.is_resolving());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = BattleEngine::new(
            mon(1, "A", Stats::uniform(50)),
            mon(2, "B", Stats::uniform(50)),
            BattleConfig::default().with_special_chances(2.0, 0.0),
        );
        assert!(matches!(result, Err(BattleError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_roster_missing_id() {
        let mut roster = Roster::new();
        roster.register(mon(1, "A", Stats::uniform(50))).unwrap();

        let err = BattleEngine::from_roster(
            &roster,
            CombatantId::new(1),
            CombatantId::new(9),
            BattleConfig::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            BattleError::MissingCombatant {
                id: CombatantId::new(9),
                reason: MissingReason::NotFound,
            }
        );
    }

    #[test]
    fn test_scenario_first_turn() {
        let mut engine = BattleEngine::new(
            mon(1, "A", Stats { speed: 100, hp: 100, ..Stats::uniform(50) }),
            mon(2, "B", Stats { speed: 50, hp: 100, ..Stats::uniform(50) }),
            base_only(),
        )
        .unwrap();

        let events = engine.resolve_turn().unwrap();

        assert_eq!(events.len(), 4);
        assert_eq!(engine.state().hp(Side::B), 90);
        assert_eq!(engine.state().turn(), Side::B);
        assert_eq!(engine.log().len(), 5);
    }

    #[test]
    fn test_double_request_mutates_once() {
        let mut engine = BattleEngine::new(
            mon(1, "A", Stats::uniform(50)),
            mon(2, "B", Stats::uniform(50)),
            base_only(),
        )
        .unwrap();

        let pending = engine.request_turn().unwrap();
        assert!(engine.is_resolving());
        assert_eq!(
            engine.request_turn(),
            Err(BattleError::InvalidState(InvalidState::TurnInFlight))
        );
        assert_eq!(
            engine.resolve_turn(),
            Err(BattleError::InvalidState(InvalidState::TurnInFlight))
        );

        engine.apply_turn(pending).unwrap();
        assert!(!engine.is_resolving());
        assert_eq!(engine.state().round(), 1);
        assert_eq!(engine.state().hp(Side::B), 40);

        // The same handle cannot be applied twice.
        assert_eq!(
            engine.apply_turn(pending),
            Err(BattleError::InvalidState(InvalidState::NoTurnInFlight))
        );
        assert_eq!(engine.state().round(), 1);
    }

    #[test]
    fn test_stale_handle_rejected() {
        let mut engine = BattleEngine::new(
            mon(1, "A", Stats::uniform(50)),
            mon(2, "B", Stats::uniform(50)),
            base_only(),
        )
        .unwrap();

        let first = engine.request_turn().unwrap();
        engine.cancel_turn(first).unwrap();
        let second = engine.request_turn().unwrap();

        assert_eq!(
            engine.apply_turn(first),
            Err(BattleError::InvalidState(InvalidState::StaleRequest))
        );
        assert!(engine.is_resolving());
        engine.apply_turn(second).unwrap();
        assert_eq!(engine.state().round(), 1);
    }

    #[test]
    fn test_cancel_leaves_state_untouched() {
        let mut engine = BattleEngine::new(
            mon(1, "A", Stats::uniform(50)),
            mon(2, "B", Stats::uniform(50)),
            BattleConfig::default(),
        )
        .unwrap();

        let before = engine.state().clone();
        let log_len = engine.log().len();
        let rng_before = engine.rng_state();

        let pending = engine.request_turn().unwrap();
        engine.cancel_turn(pending).unwrap();

        assert_eq!(engine.state(), &before);
        assert_eq!(engine.log().len(), log_len);
        assert_eq!(engine.rng_state(), rng_before);
        assert!(!engine.is_resolving());
    }

    #[test]
    fn test_terminal_battle_is_noop() {
        let mut engine = BattleEngine::new(
            mon(1, "A", Stats::uniform(50)),
            mon(2, "B", Stats { hp: 10, speed: 1, ..Stats::uniform(50) }),
            base_only(),
        )
        .unwrap();

        let winner = engine.run_to_completion().unwrap();
        assert_eq!(winner, Side::A);
        assert_eq!(engine.state().outcome(), Outcome::Winner(Side::A));

        let before = engine.state().clone();
        let log = engine.log().to_vec();

        assert_eq!(
            engine.resolve_turn(),
            Err(BattleError::InvalidState(InvalidState::BattleOver))
        );
        assert_eq!(
            engine.request_turn(),
            Err(BattleError::InvalidState(InvalidState::BattleOver))
        );
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.log(), log.as_slice());
        assert_eq!(engine.log().iter().filter(|e| e.is_victory()).count(), 1);
    }

    #[test]
    fn test_same_seed_same_battle() {
        let run = |seed| {
            let mut engine = BattleEngine::new(
                mon(1, "A", Stats { special_attack: 120, ..Stats::uniform(60) }),
                mon(2, "B", Stats { special_defense: 20, ..Stats::uniform(55) }),
                BattleConfig::default().with_seed(seed),
            )
            .unwrap();
            engine.run_to_completion().unwrap();
            engine.log().to_vec()
        };

        assert_eq!(run(7), run(7));
    }
}
