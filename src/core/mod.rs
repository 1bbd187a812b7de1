//! Core types: players, dice, configuration, move records, session state.
//!
//! These carry no rule logic. The turn engine in `rules` is the single
//! place where a session changes.

pub mod player;
pub mod rng;
pub mod config;
pub mod record;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap, PlayerStats, PowerUps, SeatCountError};
pub use rng::{Dice, GameRng, GameRngState, ScriptedDice};
pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use record::{BattleOutcome, BattleRecord, MoveRecord, Redirect};
pub use state::{Phase, Session};
