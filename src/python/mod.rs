//! Python bindings for the creature-duel battle engine.
//!
//! # Quick Start
//!
//! ```python
//! import creature_duel as duel
//!
//! a = duel.Stats(hp=100, attack=50, defense=50, special_attack=50, special_defense=50, speed=100)
//! b = duel.Stats(hp=100, attack=50, defense=50, special_attack=50, special_defense=50, speed=50)
//!
//! battle = duel.Battle("Alpha", a, "Beta", b, seed=7)
//! while battle.winner is None:
//!     for line in battle.resolve_turn():
//!         print(line)
//! ```

use pyo3::prelude::*;

mod py_battle;

pub use py_battle::*;

/// creature_duel: a turn-based creature battle engine.
#[pymodule]
fn creature_duel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyStats>()?;
    m.add_class::<PyBattle>()?;
    Ok(())
}
