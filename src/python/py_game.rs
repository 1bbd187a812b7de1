//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameConfig, GameRng};
use crate::rules::{Entrant, GameBuilder, TurnEngine, TurnFinish};

use super::py_core::{PyPlayerId, PyPlayerStats};

fn entrants(players: Vec<(String, String)>) -> Vec<Entrant> {
    players
        .into_iter()
        .map(|(name, token)| Entrant::new(name, token))
        .collect()
}

/// Python wrapper for a seeded turn engine.
#[pyclass(name = "Game")]
pub struct PyGame {
    engine: TurnEngine<GameRng>,
}

#[pymethods]
impl PyGame {
    /// Start a new game.
    ///
    /// # Arguments
    /// - players: list of (name, token) pairs, 2-4 entries
    /// - seed: RNG seed for deterministic games
    /// - shield_charges: shields each player starts with
    /// - double_roll_charges: double rolls each player starts with
    #[new]
    #[pyo3(signature = (players, seed = 42, shield_charges = 1, double_roll_charges = 1))]
    fn new(
        players: Vec<(String, String)>,
        seed: u64,
        shield_charges: u32,
        double_roll_charges: u32,
    ) -> PyResult<Self> {
        let config = GameConfig::default()
            .with_shield_charges(shield_charges)
            .with_double_roll_charges(double_roll_charges);
        let engine = GameBuilder::new()
            .config(config)
            .players(entrants(players))
            .build(seed)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Start over with new players on the same dice.
    fn restart(&mut self, players: Vec<(String, String)>) -> PyResult<()> {
        self.engine
            .start_game(&entrants(players))
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Roll for the current player.
    ///
    /// Returns the event descriptions in order, or None if the roll was ignored.
    fn roll_dice(&mut self) -> Option<Vec<String>> {
        self.engine
            .roll_dice()
            .map(|r| r.events.iter().map(ToString::to_string).collect())
    }

    fn activate_shield(&mut self) -> bool {
        self.engine.activate_shield()
    }

    fn activate_double_roll(&mut self) -> bool {
        self.engine.activate_double_roll()
    }

    /// Get a player's square.
    fn position(&self, player: &PyPlayerId) -> u8 {
        self.engine.session().player(player.0).position
    }

    /// Get a player's counters.
    fn stats(&self, player: &PyPlayerId) -> PyPlayerStats {
        PyPlayerStats(self.engine.session().player(player.0).stats)
    }

    /// Whether a player's shield is up.
    fn is_shielded(&self, player: &PyPlayerId) -> bool {
        self.engine.session().player(player.0).shield_active
    }

    /// Newest move descriptions, newest first.
    #[pyo3(signature = (count = None))]
    fn history(&self, count: Option<usize>) -> Vec<String> {
        let records = match count {
            Some(count) => self.engine.session().recent_history(count),
            None => self.engine.recent_history(),
        };
        records.into_iter().map(ToString::to_string).collect()
    }

    /// Players ranked by position, furthest first.
    fn standings(&self) -> Vec<PyPlayerId> {
        self.engine
            .session()
            .standings()
            .into_iter()
            .map(PyPlayerId)
            .collect()
    }

    #[getter]
    fn current_player(&self) -> PyPlayerId {
        PyPlayerId(self.engine.session().current_player)
    }

    #[getter]
    fn winner(&self) -> Option<PyPlayerId> {
        self.engine.winner().map(PyPlayerId)
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.engine.session().turn_number
    }

    #[getter]
    fn player_count(&self) -> usize {
        self.engine.session().player_count()
    }

    /// Play rolls until someone wins. Returns the winner.
    fn play_out(&mut self) -> Option<PyPlayerId> {
        let mut winner = None;
        while let Some(resolution) = self.engine.roll_dice() {
            if let TurnFinish::GameOver { winner: w } = resolution.finish {
                winner = Some(PyPlayerId(w));
            }
        }
        winner
    }

    fn __repr__(&self) -> String {
        let session = self.engine.session();
        let status = if session.is_game_over() {
            "over"
        } else {
            "ongoing"
        };
        format!(
            "Game(turn={}, current=P{}, status={})",
            session.turn_number, session.current_player.0, status
        )
    }
}
