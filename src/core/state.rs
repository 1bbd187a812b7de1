//! Session state: everything a game in progress knows.
//!
//! ## Session
//!
//! - Players in seat order (turn order fixed at setup)
//! - Whose turn it is and the turn number
//! - Pending double roll
//! - Append-only move history
//! - Engine phase and winner
//!
//! The turn engine owns the session and is the only thing that mutates it
//! during play. Hosts read it between events to render.
//!
//! ## Phase
//!
//! `AwaitingRoll` and `GameOver` are the only phases a host observes
//! outside an event callback. `Rolling` and `Resolving` are visible only
//! while a roll is being resolved.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId, PlayerMap};
use super::record::MoveRecord;
use crate::board::{Square, FINISH, START};

/// Turn engine phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the current player to roll or activate a power-up.
    AwaitingRoll,
    /// A die has been thrown and the piece is walking.
    Rolling,
    /// Jumps, battles and the win check are being applied.
    Resolving,
    /// Someone reached the finish. Terminal.
    GameOver,
}

impl Phase {
    /// Whether the engine is at rest (not mid-resolution).
    #[must_use]
    pub fn is_stable(self) -> bool {
        matches!(self, Phase::AwaitingRoll | Phase::GameOver)
    }
}

/// A game in progress.
///
/// Uses `im::Vector` for the history so snapshots clone in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Players in seat order.
    pub players: PlayerMap<Player>,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Set by a double-roll activation, cleared when the extra roll starts.
    pub pending_double_roll: bool,

    /// Every roll of the game, oldest first.
    pub move_history: Vector<MoveRecord>,

    pub phase: Phase,

    /// Set together with `Phase::GameOver`.
    pub winner: Option<PlayerId>,

    /// Turn number (starts at 1, advances when the turn passes).
    pub turn_number: u32,

    /// Rolls resolved so far, across all players.
    pub roll_count: u32,
}

impl Session {
    /// Create a session with every player on the start square.
    #[must_use]
    pub fn new(players: PlayerMap<Player>) -> Self {
        Self {
            players,
            current_player: PlayerId::new(0),
            pending_double_roll: false,
            move_history: Vector::new(),
            phase: Phase::AwaitingRoll,
            winner: None,
            turn_number: 1,
            roll_count: 0,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Players standing on `square`, in seat order.
    pub fn occupants(&self, square: Square) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(move |(_, p)| p.position == square)
            .map(|(id, _)| id)
    }

    /// Whether every player is on the board range.
    #[must_use]
    pub fn positions_in_range(&self) -> bool {
        self.players
            .iter()
            .all(|(_, p)| (START..=FINISH).contains(&p.position))
    }

    // === History ===

    /// Append a record.
    pub fn record_move(&mut self, record: MoveRecord) {
        self.move_history.push_back(record);
    }

    /// The newest `count` records, newest first.
    #[must_use]
    pub fn recent_history(&self, count: usize) -> Vec<&MoveRecord> {
        self.move_history.iter().rev().take(count).collect()
    }

    // === Leaderboard ===

    /// Players ranked by position, furthest first. Ties keep seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<PlayerId> {
        let mut ranked: Vec<PlayerId> = self.player_ids().collect();
        ranked.sort_by_key(|&id| std::cmp::Reverse(self.players[id].position));
        ranked
    }
}
