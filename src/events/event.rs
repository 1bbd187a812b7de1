//! Turn event types.
//!
//! A roll produces events in the order a player should see them: the die,
//! each square walked, the jump, each battle, and finally either the turn
//! passing or the game ending. Hosts replay them at their own pace.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::Square;
use crate::core::PlayerId;

/// What a shield protected against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Threat {
    Snake,
    Battle,
}

/// Something that happened while resolving a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnEvent {
    /// The die came up `value`.
    DiceRolled { player: PlayerId, value: u8 },

    /// The piece advanced one square. One per square walked.
    Stepped { player: PlayerId, square: Square },

    /// Slid down a snake.
    Snake { player: PlayerId, from: Square, to: Square },

    /// Climbed a ladder.
    Ladder { player: PlayerId, from: Square, to: Square },

    /// `holder`'s shield absorbed a threat on `square` and is now spent.
    ShieldBlocked { holder: PlayerId, threat: Threat, square: Square },

    /// `player` landed on `loser` and sent them back to the start.
    Battle { player: PlayerId, loser: PlayerId, square: Square },

    /// A pending double roll fired; `player` rolls again.
    DoubleRoll { player: PlayerId },

    /// The turn passed to `next`.
    TurnAdvanced { next: PlayerId, turn: u32 },

    /// `winner` reached the finish.
    GameOver { winner: PlayerId },
}

impl TurnEvent {
    /// The player the event is mainly about.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            TurnEvent::DiceRolled { player, .. }
            | TurnEvent::Stepped { player, .. }
            | TurnEvent::Snake { player, .. }
            | TurnEvent::Ladder { player, .. }
            | TurnEvent::Battle { player, .. }
            | TurnEvent::DoubleRoll { player } => player,
            TurnEvent::ShieldBlocked { holder, .. } => holder,
            TurnEvent::TurnAdvanced { next, .. } => next,
            TurnEvent::GameOver { winner } => winner,
        }
    }

    /// Whether this event ends a resolution.
    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(self, TurnEvent::TurnAdvanced { .. } | TurnEvent::GameOver { .. })
    }
}

impl fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TurnEvent::DiceRolled { player, value } => write!(f, "{player} rolled {value}"),
            TurnEvent::Stepped { player, square } => write!(f, "{player} steps to {square}"),
            TurnEvent::Snake { player, from, to } => {
                write!(f, "{player} slides down a snake from {from} to {to}")
            }
            TurnEvent::Ladder { player, from, to } => {
                write!(f, "{player} climbs a ladder from {from} to {to}")
            }
            TurnEvent::ShieldBlocked { holder, threat, square } => {
                let what = match threat {
                    Threat::Snake => "snake",
                    Threat::Battle => "battle",
                };
                write!(f, "{holder}'s shield blocked a {what} on {square}")
            }
            TurnEvent::Battle { player, loser, square } => {
                write!(f, "{player} knocks {loser} back to start from {square}")
            }
            TurnEvent::DoubleRoll { player } => write!(f, "{player} rolls again"),
            TurnEvent::TurnAdvanced { next, turn } => write!(f, "turn {turn}: {next} to roll"),
            TurnEvent::GameOver { winner } => write!(f, "{winner} wins"),
        }
    }
}
