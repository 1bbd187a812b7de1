//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{PlayerId, PlayerStats};

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Create a new player ID.
    #[new]
    fn new(id: u8) -> Self {
        Self(PlayerId::new(id))
    }

    /// Get the seat index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    /// Get the raw ID value.
    #[getter]
    fn id(&self) -> u8 {
        self.0 .0
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 .0 as u64
    }
}

/// Python wrapper for a player's counters.
#[pyclass(name = "PlayerStats")]
#[derive(Clone, Debug)]
pub struct PyPlayerStats(pub PlayerStats);

#[pymethods]
impl PyPlayerStats {
    #[getter]
    fn snakes_hit(&self) -> u32 {
        self.0.snakes_hit
    }

    #[getter]
    fn ladders_hit(&self) -> u32 {
        self.0.ladders_hit
    }

    #[getter]
    fn battles_won(&self) -> u32 {
        self.0.battles_won
    }

    #[getter]
    fn rolls_taken(&self) -> u32 {
        self.0.rolls_taken
    }

    fn __repr__(&self) -> String {
        format!(
            "PlayerStats(snakes={}, ladders={}, battles={}, rolls={})",
            self.0.snakes_hit, self.0.ladders_hit, self.0.battles_won, self.0.rolls_taken
        )
    }
}
