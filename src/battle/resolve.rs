//! Pure turn resolution.
//!
//! `resolve_turn` advances a battle by one half-turn given the random
//! decisions for that turn. It never touches an RNG, so the same inputs
//! always give the same result.

use super::damage::{DamageCalc, TurnRoll};
use super::error::{BattleError, InvalidState};
use super::event::{TurnEvent, TurnEvents};
use super::state::BattleState;
use crate::core::DamageRules;

/// Result of resolving one turn.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnResolution {
    /// State after the turn.
    pub state: BattleState,
    /// New log entries, in order.
    pub events: TurnEvents,
    /// Damage breakdown for the turn.
    pub damage: DamageCalc,
}

/// Resolve one turn: the side in `state.turn()` attacks the other.
///
/// Fails with `InvalidState::BattleOver` if the battle is already decided
/// and with `InvalidConfig` if `rules` do not validate. `state` is never
/// modified.
///
/// ```
/// use creature_duel::battle::{resolve_turn, BattleState, TurnRoll};
/// use creature_duel::core::{DamageRules, Side};
/// use creature_duel::roster::{Combatant, CombatantId, Stats};
///
/// let a = Combatant::new(CombatantId::new(1), "A", Stats { speed: 100, ..Stats::uniform(50) });
/// let b = Combatant::new(CombatantId::new(2), "B", Stats { speed: 50, hp: 100, ..Stats::uniform(50) });
/// let state = BattleState::new(a, b).unwrap();
///
/// let next = resolve_turn(&state, TurnRoll::base(), &DamageRules::default()).unwrap();
/// assert_eq!(next.damage.applied, 10);
/// assert_eq!(next.state.hp(Side::B), 90);
/// assert_eq!(next.state.turn(), Side::B);
/// ```
pub fn resolve_turn(
    state: &BattleState,
    roll: TurnRoll,
    rules: &DamageRules,
) -> Result<TurnResolution, BattleError> {
    rules.validate()?;
    if state.is_terminal() {
        return Err(InvalidState::BattleOver.into());
    }

    let attacker = state.turn();
    let defender = attacker.opponent();
    let attacker_name = &state.combatant(attacker).display_name;
    let defender_name = &state.combatant(defender).display_name;

    let damage = DamageCalc::compute(
        &state.combatant(attacker).stats,
        &state.combatant(defender).stats,
        roll,
        rules,
    );

    let mut next = state.clone();
    let defender_hp = next.apply_damage(defender, damage.applied);

    let mut events = TurnEvents::new();
    events.push(TurnEvent::AttackDeclared {
        side: attacker,
        name: attacker_name.clone(),
        kind: damage.attack_kind,
        value: damage.attack_value,
    });
    events.push(TurnEvent::DefenseDeclared {
        side: defender,
        name: defender_name.clone(),
        kind: damage.defense_kind,
        value: damage.defense_value,
    });
    events.push(TurnEvent::DamageDealt {
        attacker,
        name: attacker_name.clone(),
        defender,
        damage: damage.applied,
        defender_hp,
    });
    events.push(TurnEvent::Separator);

    next.advance_round();

    if defender_hp == 0 {
        next.declare_winner(attacker);
        events.push(TurnEvent::Victory {
            side: attacker,
            name: attacker_name.clone(),
        });
    } else {
        next.pass_turn();
    }

    Ok(TurnResolution {
        state: next,
        events,
        damage,
    })
}
