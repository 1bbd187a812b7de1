//! Jump tables and their construction-time validation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{Square, FINISH, START};

/// The classic snakes, as (head, tail).
const CLASSIC_SNAKES: [(Square, Square); 6] =
    [(16, 6), (48, 30), (62, 19), (88, 24), (95, 56), (97, 78)];

/// The classic ladders, as (foot, top).
const CLASSIC_LADDERS: [(Square, Square); 9] = [
    (1, 38),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

/// Which way a jump goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpKind {
    Snake,
    Ladder,
}

/// A forced relocation from one square to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    pub kind: JumpKind,
    pub from: Square,
    pub to: Square,
}

/// Reasons a board is rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("square {square} is outside the playable range")]
    SquareOutOfRange { square: Square },

    #[error("jump from {square} lands on itself")]
    SelfJump { square: Square },

    #[error("snake {from}->{to} does not go down")]
    SnakeNotDescending { from: Square, to: Square },

    #[error("ladder {from}->{to} does not go up")]
    LadderNotAscending { from: Square, to: Square },

    #[error("square {square} starts more than one jump")]
    OverlappingSource { square: Square },

    #[error("jump {from}->{via} lands on the start of another jump")]
    ChainedJump { from: Square, via: Square },
}

/// Immutable snake and ladder topology.
///
/// Invariants (checked by [`Board::new`]):
/// - every source is in 1..=99 and every target in 1..=100
/// - snakes go strictly down, ladders strictly up
/// - no square starts two jumps
/// - no jump lands on the start of another, so redirection is single-step
#[derive(Clone, Debug)]
pub struct Board {
    snakes: FxHashMap<Square, Square>,
    ladders: FxHashMap<Square, Square>,
}

impl Board {
    /// Build and validate a board from (source, target) pairs.
    pub fn new(
        snakes: impl IntoIterator<Item = (Square, Square)>,
        ladders: impl IntoIterator<Item = (Square, Square)>,
    ) -> Result<Self, BoardError> {
        let mut snake_table = FxHashMap::default();
        for (from, to) in snakes {
            check_endpoints(from, to)?;
            if to > from {
                return Err(BoardError::SnakeNotDescending { from, to });
            }
            if snake_table.insert(from, to).is_some() {
                return Err(BoardError::OverlappingSource { square: from });
            }
        }

        let mut ladder_table = FxHashMap::default();
        for (from, to) in ladders {
            check_endpoints(from, to)?;
            if to < from {
                return Err(BoardError::LadderNotAscending { from, to });
            }
            if snake_table.contains_key(&from) || ladder_table.insert(from, to).is_some() {
                return Err(BoardError::OverlappingSource { square: from });
            }
        }

        let board = Self {
            snakes: snake_table,
            ladders: ladder_table,
        };

        if let Some(jump) = board.jumps().find(|j| board.jump_from(j.to).is_some()) {
            return Err(BoardError::ChainedJump {
                from: jump.from,
                via: jump.to,
            });
        }

        Ok(board)
    }

    /// The fixed 100-square layout the game is played on.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            snakes: CLASSIC_SNAKES.into_iter().collect(),
            ladders: CLASSIC_LADDERS.into_iter().collect(),
        }
    }

    /// Look up the jump starting at `square`, snakes first.
    #[must_use]
    pub fn jump_from(&self, square: Square) -> Option<Jump> {
        if let Some(&to) = self.snakes.get(&square) {
            return Some(Jump {
                kind: JumpKind::Snake,
                from: square,
                to,
            });
        }
        self.ladders.get(&square).map(|&to| Jump {
            kind: JumpKind::Ladder,
            from: square,
            to,
        })
    }

    /// Snakes sorted by head square.
    #[must_use]
    pub fn snakes(&self) -> Vec<Jump> {
        sorted(&self.snakes, JumpKind::Snake)
    }

    /// Ladders sorted by foot square.
    #[must_use]
    pub fn ladders(&self) -> Vec<Jump> {
        sorted(&self.ladders, JumpKind::Ladder)
    }

    fn jumps(&self) -> impl Iterator<Item = Jump> + '_ {
        let snakes = self.snakes.iter().map(|(&from, &to)| Jump {
            kind: JumpKind::Snake,
            from,
            to,
        });
        let ladders = self.ladders.iter().map(|(&from, &to)| Jump {
            kind: JumpKind::Ladder,
            from,
            to,
        });
        snakes.chain(ladders)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

fn check_endpoints(from: Square, to: Square) -> Result<(), BoardError> {
    if from == START || from >= FINISH {
        return Err(BoardError::SquareOutOfRange { square: from });
    }
    if to == START || to > FINISH {
        return Err(BoardError::SquareOutOfRange { square: to });
    }
    if from == to {
        return Err(BoardError::SelfJump { square: from });
    }
    Ok(())
}

fn sorted(table: &FxHashMap<Square, Square>, kind: JumpKind) -> Vec<Jump> {
    let mut jumps: Vec<Jump> = table
        .iter()
        .map(|(&from, &to)| Jump { kind, from, to })
        .collect();
    jumps.sort_by_key(|j| j.from);
    jumps
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [(Square, Square); 0] = [];

    #[test]
    fn test_classic_board_is_valid() {
        let rebuilt = Board::new(CLASSIC_SNAKES, CLASSIC_LADDERS);
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_jump_lookup() {
        let board = Board::classic();

        assert_eq!(
            board.jump_from(16),
            Some(Jump { kind: JumpKind::Snake, from: 16, to: 6 })
        );
        assert_eq!(
            board.jump_from(1),
            Some(Jump { kind: JumpKind::Ladder, from: 1, to: 38 })
        );
        assert_eq!(board.jump_from(50), None);
        assert_eq!(board.jump_from(START), None);
        assert_eq!(board.jump_from(FINISH), None);
    }

    #[test]
    fn test_lookup_is_pure() {
        let board = Board::classic();
        for square in START..=FINISH {
            assert_eq!(board.jump_from(square), board.jump_from(square));
        }
    }

    #[test]
    fn test_sorted_listings() {
        let board = Board::classic();

        let snakes = board.snakes();
        assert_eq!(snakes.len(), 6);
        assert_eq!(snakes[0].from, 16);
        assert_eq!(snakes[5].from, 97);
        assert!(snakes.iter().all(|j| j.to < j.from));

        let ladders = board.ladders();
        assert_eq!(ladders.len(), 9);
        assert_eq!(ladders.last().map(|j| j.to), Some(FINISH));
        assert!(ladders.iter().all(|j| j.to > j.from));
    }

    #[test]
    fn test_reject_out_of_range() {
        assert_eq!(
            Board::new([(0, 5)], NONE).unwrap_err(),
            BoardError::SquareOutOfRange { square: 0 }
        );
        assert_eq!(
            Board::new(NONE, [(100, 5)]).unwrap_err(),
            BoardError::SquareOutOfRange { square: 100 }
        );
        assert_eq!(
            Board::new(NONE, [(5, 101)]).unwrap_err(),
            BoardError::SquareOutOfRange { square: 101 }
        );
        assert_eq!(
            Board::new([(20, 0)], NONE).unwrap_err(),
            BoardError::SquareOutOfRange { square: 0 }
        );
    }

    #[test]
    fn test_reject_self_jump() {
        assert_eq!(
            Board::new([(30, 30)], NONE).unwrap_err(),
            BoardError::SelfJump { square: 30 }
        );
    }

    #[test]
    fn test_reject_wrong_direction() {
        assert_eq!(
            Board::new([(10, 20)], NONE).unwrap_err(),
            BoardError::SnakeNotDescending { from: 10, to: 20 }
        );
        assert_eq!(
            Board::new(NONE, [(20, 10)]).unwrap_err(),
            BoardError::LadderNotAscending { from: 20, to: 10 }
        );
    }

    #[test]
    fn test_reject_overlapping_source() {
        assert_eq!(
            Board::new([(40, 10)], [(40, 60)]).unwrap_err(),
            BoardError::OverlappingSource { square: 40 }
        );
        assert_eq!(
            Board::new([(40, 10), (40, 20)], NONE).unwrap_err(),
            BoardError::OverlappingSource { square: 40 }
        );
    }

    #[test]
    fn test_reject_chained_jump() {
        assert_eq!(
            Board::new([(60, 30)], [(30, 50)]).unwrap_err(),
            BoardError::ChainedJump { from: 60, via: 30 }
        );
    }

    #[test]
    fn test_error_messages() {
        let err = BoardError::ChainedJump { from: 60, via: 30 };
        assert_eq!(err.to_string(), "jump 60->30 lands on the start of another jump");
    }
}
