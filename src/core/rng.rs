//! Dice: the engine's only source of randomness.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical game
//! - **Serializable**: O(1) state capture and restore
//! - **Scriptable**: `ScriptedDice` replays fixed faces for tests and replays
//!
//! ```
//! use snakes_ladders::core::{Dice, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! for _ in 0..20 {
//!     let face = a.roll(6);
//!     assert!((1..=6).contains(&face));
//!     assert_eq!(face, b.roll(6));
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A die the turn engine can roll.
pub trait Dice {
    /// Roll one die with `sides` faces, returning a face in `1..=sides`.
    fn roll(&mut self, sides: u8) -> u8;
}

/// Seeded uniform dice.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Dice for GameRng {
    fn roll(&mut self, sides: u8) -> u8 {
        self.inner.gen_range(1..=sides.max(1))
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of
/// how many dice have been rolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Dice that replay a fixed script of faces, cycling when exhausted.
///
/// Faces outside `1..=sides` are clamped into range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create dice that return `faces` in order.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: Vec<u8> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "Scripted dice need at least one face");
        Self { faces, cursor: 0 }
    }

    /// Number of faces rolled so far.
    #[must_use]
    pub fn rolled(&self) -> usize {
        self.cursor
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, sides: u8) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face.clamp(1, sides.max(1))
    }
}

impl<D: Dice + ?Sized> Dice for Box<D> {
    fn roll(&mut self, sides: u8) -> u8 {
        (**self).roll(sides)
    }
}
