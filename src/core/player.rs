//! Player identification, per-player storage, and the player record.
//!
//! A [`Player`] is a plain mutable record: position, stats, power-up inventory and the
//! shield flag. It carries no rule logic; every transition is made by
//! the turn engine.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::board::{Square, START};

/// Seat at the table. Seat 0 rolls first; turns go up by one and wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Seat as a vector index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every seat of a table with `seats` players, in turn order.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(seats: usize) -> impl Iterator<Item = PlayerId> {
        (0..seats as u8).map(PlayerId)
    }

    /// The seat after this one, wrapping around the table.
    #[must_use]
    pub fn next(self, seats: usize) -> Self {
        Self(((self.index() + 1) % seats) as u8)
    }
}

/// Seats print 1-based, the way a table would number them.
impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0 + 1)
    }
}

/// One value per seat, indexed by [`PlayerId`].
///
/// ```
/// use snakes_ladders::core::{PlayerId, PlayerMap};
///
/// let mut squares: PlayerMap<u8> = PlayerMap::new(2, |_| 0);
/// squares[PlayerId::new(1)] = 38;
/// assert_eq!(squares[PlayerId::new(0)], 0);
/// assert_eq!(squares[PlayerId::new(1)], 38);
/// ```
///
/// Serializes as a plain list. Deserializing checks the seat count the
/// same way [`PlayerMap::from_vec`] does.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<T>",
    into = "Vec<T>",
    bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de>")
)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

/// A seat list that cannot form a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("a table needs 1 to 255 seats, got {count}")]
pub struct SeatCountError {
    pub count: usize,
}

impl<T> PlayerMap<T> {
    /// Fill every seat from `factory`.
    pub fn new(seats: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        Self::from_vec(PlayerId::all(seats).map(factory).collect())
    }

    /// Take entries already in seat order.
    ///
    /// # Panics
    /// With no entries, or more than `u8` can number.
    pub fn from_vec(seats: Vec<T>) -> Self {
        assert!(!seats.is_empty(), "a table needs at least one seat");
        assert!(seats.len() <= u8::MAX as usize, "too many seats");
        Self { seats }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// `(seat, value)` pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.seats.len()).zip(self.seats.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all(self.seats.len()).zip(self.seats.iter_mut())
    }
}

impl<T> TryFrom<Vec<T>> for PlayerMap<T> {
    type Error = SeatCountError;

    fn try_from(seats: Vec<T>) -> Result<Self, SeatCountError> {
        if seats.is_empty() || seats.len() > u8::MAX as usize {
            return Err(SeatCountError { count: seats.len() });
        }
        Ok(Self { seats })
    }
}

impl<T> From<PlayerMap<T>> for Vec<T> {
    fn from(map: PlayerMap<T>) -> Self {
        map.seats
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}

/// Lifetime counters. Never decrease during a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub snakes_hit: u32,
    pub ladders_hit: u32,
    pub battles_won: u32,
    pub rolls_taken: u32,
}

/// Consumable power-up charges. Spent on activation, never replenished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUps {
    pub shield_charges: u32,
    pub double_roll_charges: u32,
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Current square, 0 before the first move.
    pub position: Square,

    /// Display name, fixed at game start.
    pub name: String,

    /// Avatar glyph, fixed at game start.
    pub token: String,

    pub stats: PlayerStats,

    pub power_ups: PowerUps,

    /// Set by activating a shield; cleared by the next snake or battle
    /// that would have hurt this player.
    pub shield_active: bool,
}

impl Player {
    /// Create a player on the start square with the given charges.
    #[must_use]
    pub fn new(name: impl Into<String>, token: impl Into<String>, power_ups: PowerUps) -> Self {
        Self {
            position: START,
            name: name.into(),
            token: token.into(),
            stats: PlayerStats::default(),
            power_ups,
            shield_active: false,
        }
    }
}
