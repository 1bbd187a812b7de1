//! Python bindings for the snakes-ladders turn engine.
//!
//! # Quick Start
//!
//! ```python
//! import snakes_ladders as sl
//!
//! game = sl.Game([("Ada", "🦊"), ("Bo", "")], seed=42)
//! game.activate_shield()
//! for line in game.roll_dice():
//!     print(line)
//!
//! winner = game.play_out()
//! print(game.history())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// snakes_ladders: Snakes and Ladders with shields, double rolls and battles.
#[pymodule]
fn snakes_ladders(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyPlayerStats>()?;
    m.add_class::<PyGame>()?;

    Ok(())
}
