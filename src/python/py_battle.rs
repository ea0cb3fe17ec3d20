//! Battle bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::battle::{BattleEngine, BattleError};
use crate::core::{BattleConfig, Side};
use crate::roster::{Combatant, CombatantId, Roster, Stats};

fn to_py_err(err: BattleError) -> PyErr {
    if err.is_recoverable() {
        PyRuntimeError::new_err(err.to_string())
    } else {
        PyValueError::new_err(err.to_string())
    }
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::A => "A",
        Side::B => "B",
    }
}

/// Python wrapper for Stats.
#[pyclass(name = "Stats")]
#[derive(Clone, Debug)]
pub struct PyStats(pub Stats);

#[pymethods]
impl PyStats {
    #[new]
    #[pyo3(signature = (hp, attack, defense, special_attack, special_defense, speed))]
    fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        special_attack: u32,
        special_defense: u32,
        speed: u32,
    ) -> Self {
        Self(Stats {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        })
    }

    #[getter]
    fn hp(&self) -> u32 {
        self.0.hp
    }

    #[getter]
    fn speed(&self) -> u32 {
        self.0.speed
    }

    fn __repr__(&self) -> String {
        format!(
            "Stats(hp={}, attack={}, defense={}, special_attack={}, special_defense={}, speed={})",
            self.0.hp,
            self.0.attack,
            self.0.defense,
            self.0.special_attack,
            self.0.special_defense,
            self.0.speed
        )
    }
}

/// Python wrapper for BattleEngine.
///
/// Side A is the first creature passed in, side B the second.
#[pyclass(name = "Battle")]
pub struct PyBattle {
    engine: BattleEngine,
}

#[pymethods]
impl PyBattle {
    /// Start a battle.
    ///
    /// # Arguments
    /// - name_a, stats_a: Side A creature
    /// - name_b, stats_b: Side B creature
    /// - seed: RNG seed for deterministic battles
    #[new]
    #[pyo3(signature = (name_a, stats_a, name_b, stats_b, seed = 42))]
    fn new(
        name_a: String,
        stats_a: &PyStats,
        name_b: String,
        stats_b: &PyStats,
        seed: u64,
    ) -> PyResult<Self> {
        let a = Combatant::new(CombatantId::new(1), name_a, stats_a.0);
        let b = Combatant::new(CombatantId::new(2), name_b, stats_b.0);
        let engine = BattleEngine::new(a, b, BattleConfig::default().with_seed(seed))
            .map_err(to_py_err)?;
        Ok(Self { engine })
    }

    /// Start a battle from a catalog JSON listing and two ids.
    #[staticmethod]
    #[pyo3(signature = (catalog_json, player_id, opponent_id, seed = 42))]
    fn from_catalog(catalog_json: &str, player_id: u32, opponent_id: u32, seed: u64) -> PyResult<Self> {
        let roster = Roster::from_catalog_json(catalog_json)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let engine = BattleEngine::from_roster(
            &roster,
            CombatantId::new(player_id),
            CombatantId::new(opponent_id),
            BattleConfig::default().with_seed(seed),
        )
        .map_err(to_py_err)?;
        Ok(Self { engine })
    }

    /// Resolve one turn and return its log lines.
    ///
    /// Raises RuntimeError once the battle is decided.
    fn resolve_turn(&mut self) -> PyResult<Vec<String>> {
        let events = self.engine.resolve_turn().map_err(to_py_err)?;
        Ok(events.iter().map(ToString::to_string).collect())
    }

    /// Resolve turns until one side wins. Returns "A" or "B".
    fn run_to_completion(&mut self) -> PyResult<&'static str> {
        let winner = self.engine.run_to_completion().map_err(to_py_err)?;
        Ok(side_name(winner))
    }

    #[getter]
    fn hp_a(&self) -> u32 {
        self.engine.state().hp(Side::A)
    }

    #[getter]
    fn hp_b(&self) -> u32 {
        self.engine.state().hp(Side::B)
    }

    /// Side to move next: "A" or "B".
    #[getter]
    fn turn(&self) -> &'static str {
        side_name(self.engine.state().turn())
    }

    #[getter]
    fn round(&self) -> u32 {
        self.engine.state().round()
    }

    /// "A", "B", or None while the battle is in progress.
    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.engine.state().winner().map(side_name)
    }

    /// Full battle log as text lines.
    fn log(&self) -> Vec<String> {
        self.engine.log().iter().map(ToString::to_string).collect()
    }

    fn __repr__(&self) -> String {
        let state = self.engine.state();
        format!(
            "Battle(round={}, hp_a={}, hp_b={}, turn={})",
            state.round(),
            state.hp(Side::A),
            state.hp(Side::B),
            side_name(state.turn())
        )
    }
}
