//! # snakes-ladders
//!
//! A Snakes and Ladders turn engine with power-ups and battles.
//!
//! ## Design Principles
//!
//! 1. **One locus of rules**: players and sessions are plain data. Only
//!    the `TurnEngine` changes them.
//!
//! 2. **Events, not animation**: a roll yields an ordered list of events
//!    (die, each square walked, jump, battles, turn end). Hosts pace and
//!    draw them however they like.
//!
//! 3. **Deterministic**: dice are seeded ChaCha8 or a fixed script, so any
//!    game can be replayed exactly.
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::rules::{GameBuilder, TurnFinish};
//!
//! let mut game = GameBuilder::new()
//!     .player("Ada", "🦊")
//!     .player("Bo", "🐼")
//!     .build(42)
//!     .unwrap();
//!
//! game.activate_shield();
//! while let Some(resolution) = game.roll_dice() {
//!     if let TurnFinish::GameOver { winner } = resolution.finish {
//!         assert_eq!(game.winner(), Some(winner));
//!     }
//! }
//! assert!(game.is_game_over());
//! ```
//!
//! ## Modules
//!
//! - `board`: squares, snakes, ladders, board validation
//! - `core`: players, dice, configuration, move records, session state
//! - `events`: turn events and the `EventSink` presentation seam
//! - `rules`: game setup and the turn engine

pub mod board;
pub mod core;
pub mod events;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::board::{Board, BoardError, Jump, JumpKind, Square, FINISH, START};

pub use crate::core::{
    Dice, GameRng, GameRngState, ScriptedDice,
    GameConfig,
    Player, PlayerId, PlayerMap, PlayerStats, PowerUps,
    MoveRecord, Phase, Session,
};

pub use crate::events::{EventSink, NullSink, Threat, TurnEvent};

pub use crate::rules::{Entrant, GameBuilder, Resolution, SetupError, TurnEngine, TurnFinish};
