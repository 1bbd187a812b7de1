//! Move history records.
//!
//! One `MoveRecord` is appended per die roll, after jumps and battles are
//! resolved. Records are plain data for replay and debugging; `Display`
//! renders the one-line description shown in a move-history panel.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::player::PlayerId;
use crate::board::{Jump, JumpKind, Square};

/// What happened at the jump square, if anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Redirect {
    /// The jump was applied.
    Taken { jump: Jump },
    /// A shield stopped the snake; the mover stayed on its head.
    Blocked { jump: Jump },
}

/// How one battle on the landing square ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BattleOutcome {
    /// The occupant was sent back to the start.
    KnockedOut,
    /// A shield absorbed the battle. `holder` is whose shield it was.
    Blocked { holder: PlayerId },
}

/// One battle against one occupant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub opponent: PlayerId,
    pub opponent_name: String,
    pub outcome: BattleOutcome,
}

/// A recorded die roll with everything it caused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number when the roll was made.
    pub turn: u32,

    /// Roll number across the whole game (for ordering).
    pub sequence: u32,

    pub player: PlayerId,
    pub name: String,
    pub token: String,

    /// Face shown by the die.
    pub roll: u8,

    /// Square before moving.
    pub from: Square,

    /// Square reached by walking, before any jump.
    pub landed: Square,

    /// Square after jumps and battles.
    pub to: Square,

    pub redirect: Option<Redirect>,

    /// Battles in seat order. At most three with four players.
    pub battles: SmallVec<[BattleRecord; 3]>,
}

impl MoveRecord {
    /// Number of occupants this roll knocked back to the start.
    #[must_use]
    pub fn knockouts(&self) -> usize {
        self.battles
            .iter()
            .filter(|b| b.outcome == BattleOutcome::KnockedOut)
            .count()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} rolled {} and moved from {} to {}",
            self.name, self.token, self.roll, self.from, self.landed
        )?;

        match self.redirect {
            Some(Redirect::Taken { jump }) => match jump.kind {
                JumpKind::Snake => write!(f, " 🐍 (snake to {})", jump.to)?,
                JumpKind::Ladder => write!(f, " 🪜 (ladder to {})", jump.to)?,
            },
            Some(Redirect::Blocked { .. }) => write!(f, " 🛡️ Blocked a snake!")?,
            None => {}
        }

        for battle in &self.battles {
            match battle.outcome {
                BattleOutcome::KnockedOut => {
                    write!(f, " ⚔️ (knocked {} to start)", battle.opponent_name)?;
                }
                BattleOutcome::Blocked { .. } => write!(f, " 🛡️ Blocked a battle!")?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn record() -> MoveRecord {
        MoveRecord {
            turn: 3,
            sequence: 5,
            player: PlayerId::new(0),
            name: "Ada".to_string(),
            token: "🦊".to_string(),
            roll: 2,
            from: 14,
            landed: 16,
            to: 16,
            redirect: None,
            battles: SmallVec::new(),
        }
    }

    #[test]
    fn test_plain_move_text() {
        assert_eq!(record().to_string(), "Ada 🦊 rolled 2 and moved from 14 to 16");
    }

    #[test]
    fn test_snake_text() {
        let mut rec = record();
        rec.to = 6;
        rec.redirect = Some(Redirect::Taken {
            jump: Jump { kind: JumpKind::Snake, from: 16, to: 6 },
        });

        assert_eq!(
            rec.to_string(),
            "Ada 🦊 rolled 2 and moved from 14 to 16 🐍 (snake to 6)"
        );
    }

    #[test]
    fn test_blocked_snake_and_battles_text() {
        let mut rec = record();
        rec.redirect = Some(Redirect::Blocked {
            jump: Jump { kind: JumpKind::Snake, from: 16, to: 6 },
        });
        rec.battles = smallvec![
            BattleRecord {
                opponent: PlayerId::new(1),
                opponent_name: "Bo".to_string(),
                outcome: BattleOutcome::KnockedOut,
            },
            BattleRecord {
                opponent: PlayerId::new(2),
                opponent_name: "Cy".to_string(),
                outcome: BattleOutcome::Blocked { holder: PlayerId::new(2) },
            },
        ];

        assert_eq!(
            rec.to_string(),
            "Ada 🦊 rolled 2 and moved from 14 to 16 🛡️ Blocked a snake! \
             ⚔️ (knocked Bo to start) 🛡️ Blocked a battle!"
        );
        assert_eq!(rec.knockouts(), 1);
    }

    #[test]
    fn test_record_serialization() {
        let mut rec = record();
        rec.redirect = Some(Redirect::Taken {
            jump: Jump { kind: JumpKind::Ladder, from: 1, to: 38 },
        });
        let json = serde_json::to_string(&rec).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, deserialized);
    }
}
