//! Paced battle in the terminal.
//!
//! Plays the role of the presentation layer: requests a turn, waits the
//! configured delay, applies it and prints HP bars and log lines.
//!
//! ```bash
//! RUST_LOG=creature_duel=debug cargo run --example duel -- 1 4 7
//! ```
//!
//! Arguments are the player id, opponent id and seed. Missing ids are
//! picked at random.

use std::thread;

use creature_duel::battle::BattleEngine;
use creature_duel::core::{BattleConfig, BattleRng, Side};
use creature_duel::matchup::Matchup;
use creature_duel::roster::{CombatantId, Roster};
use tracing_subscriber::EnvFilter;

const CATALOG: &str = r#"[
    {"id": 1, "name": {"english": "Bulbasaur"},
     "base": {"HP": 45, "Attack": 49, "Defense": 49, "Sp. Attack": 65, "Sp. Defense": 65, "Speed": 45}},
    {"id": 2, "name": {"english": "Charmander"},
     "base": {"HP": 39, "Attack": 52, "Defense": 43, "Sp. Attack": 60, "Sp. Defense": 50, "Speed": 65}},
    {"id": 3, "name": {"english": "Squirtle"},
     "base": {"HP": 44, "Attack": 48, "Defense": 65, "Sp. Attack": 50, "Sp. Defense": 64, "Speed": 43}},
    {"id": 4, "name": {"english": "Pikachu"},
     "base": {"HP": 35, "Attack": 55, "Defense": 40, "Sp. Attack": 50, "Sp. Defense": 50, "Speed": 90}},
    {"id": 5, "name": {"english": "Snorlax"},
     "base": {"HP": 160, "Attack": 110, "Defense": 65, "Sp. Attack": 65, "Sp. Defense": 110, "Speed": 30}}
]"#;

fn hp_bar(engine: &BattleEngine, side: Side) -> String {
    const WIDTH: usize = 20;
    let state = engine.state();
    let filled = (state.hp_fraction(side) * WIDTH as f64).round() as usize;
    format!(
        "{:<12} [{}{}] {:>3}/{}",
        state.combatant(side).display_name,
        "#".repeat(filled),
        ".".repeat(WIDTH - filled),
        state.hp(side),
        state.max_hp(side),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<u32> = std::env::args().skip(1).filter_map(|a| a.parse().ok()).collect();
    let seed = args.get(2).copied().map_or(42, u64::from);

    let roster = Roster::from_catalog_json(CATALOG)?;
    let mut picks = BattleRng::new(seed).for_context("matchup");
    let mut matchup = Matchup::random(&roster, &mut picks).ok_or("empty roster")?;
    if let Some(&id) = args.first() {
        matchup.player = CombatantId::new(id);
    }
    if let Some(&id) = args.get(1) {
        matchup.opponent = CombatantId::new(id);
    }

    let config = BattleConfig::default().with_seed(seed);
    let delay = config.turn_delay();
    let mut engine = BattleEngine::from_matchup(&roster, matchup, config)?;

    for event in engine.log() {
        println!("{event}");
    }

    while !engine.state().is_terminal() {
        let pending = engine.request_turn()?;
        thread::sleep(delay);

        for event in engine.apply_turn(pending)? {
            println!("{event}");
        }
        println!("{}", hp_bar(&engine, Side::A));
        println!("{}", hp_bar(&engine, Side::B));
    }

    if let Some(winner) = engine.state().winner() {
        let next = matchup.rematch(winner, &roster, &mut picks);
        println!("next up: {} vs {}", next.player, next.opponent);
    }

    Ok(())
}
