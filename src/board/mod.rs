//! Board model: square numbering and the snake/ladder jump tables.
//!
//! Squares run from `START` (0, off the board) through 1..=99 to
//! `FINISH` (100). The board is immutable once built and every lookup
//! is pure.

mod layout;

pub use layout::{Board, BoardError, Jump, JumpKind};

/// Square index in `START..=FINISH`.
pub type Square = u8;

/// Where every player begins, and where battle losers are sent.
pub const START: Square = 0;

/// Reaching this square wins the game.
pub const FINISH: Square = 100;
