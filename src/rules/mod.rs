//! Turn engine: the only place game rules live.
//!
//! - [`GameBuilder`] seats players and builds a [`TurnEngine`]
//! - [`TurnEngine`] resolves rolls and power-up activations
//! - battles on shared squares are resolved inside each roll
//!
//! Hosts drive the engine through its call interface and observe it
//! through returned [`Resolution`]s or an `EventSink`.

mod battle;
pub mod engine;
pub mod setup;

pub use engine::{Resolution, TurnEngine, TurnFinish};
pub use setup::{Entrant, GameBuilder, SetupError, DEFAULT_TOKENS};
