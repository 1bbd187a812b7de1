//! Battles on a shared landing square.

use log::debug;
use smallvec::SmallVec;

use crate::board::START;
use crate::core::{BattleOutcome, BattleRecord, PlayerId, Session};
use crate::events::{Threat, TurnEvent};

use super::engine::Emitter;

/// Fight every other player on the mover's square, in seat order.
///
/// Each occupant is one battle. A shield absorbs it, the occupant's checked
/// before the mover's, and only one shield is spent per battle. Otherwise
/// the occupant goes back to the start and the mover scores a win.
/// Nothing happens on the start square.
pub(super) fn resolve_battles(
    session: &mut Session,
    mover: PlayerId,
    out: &mut Emitter<'_>,
) -> SmallVec<[BattleRecord; 3]> {
    let square = session.player(mover).position;
    let mut records = SmallVec::new();
    if square == START {
        return records;
    }

    let opponents: SmallVec<[PlayerId; 3]> =
        session.occupants(square).filter(|&id| id != mover).collect();

    for opponent in opponents {
        let (outcome, event) = if session.player(opponent).shield_active {
            session.player_mut(opponent).shield_active = false;
            (
                BattleOutcome::Blocked { holder: opponent },
                TurnEvent::ShieldBlocked {
                    holder: opponent,
                    threat: Threat::Battle,
                    square,
                },
            )
        } else if session.player(mover).shield_active {
            session.player_mut(mover).shield_active = false;
            (
                BattleOutcome::Blocked { holder: mover },
                TurnEvent::ShieldBlocked {
                    holder: mover,
                    threat: Threat::Battle,
                    square,
                },
            )
        } else {
            session.player_mut(opponent).position = START;
            session.player_mut(mover).stats.battles_won += 1;
            (
                BattleOutcome::KnockedOut,
                TurnEvent::Battle {
                    player: mover,
                    loser: opponent,
                    square,
                },
            )
        };

        debug!("{}", event);
        out.emit(event, session);
        records.push(BattleRecord {
            opponent,
            opponent_name: session.player(opponent).name.clone(),
            outcome,
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, PlayerMap, PowerUps};
    use crate::events::NullSink;

    fn session(positions: &[u8]) -> Session {
        let players = positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| {
                let mut p = Player::new(format!("P{i}"), "•", PowerUps::default());
                p.position = pos;
                p
            })
            .collect();
        Session::new(PlayerMap::from_vec(players))
    }

    fn fight(state: &mut Session, mover: PlayerId) -> SmallVec<[BattleRecord; 3]> {
        let mut sink = NullSink;
        let mut out = Emitter::new(&mut sink);
        resolve_battles(state, mover, &mut out)
    }

    #[test]
    fn test_knocks_every_unshielded_occupant() {
        let mut state = session(&[50, 50, 50, 12]);

        let records = fight(&mut state, PlayerId::new(0));

        assert_eq!(records.len(), 2);
        assert_eq!(state.player(PlayerId::new(1)).position, START);
        assert_eq!(state.player(PlayerId::new(2)).position, START);
        assert_eq!(state.player(PlayerId::new(3)).position, 12);
        assert_eq!(state.player(PlayerId::new(0)).stats.battles_won, 2);
    }

    #[test]
    fn test_occupant_shield_checked_first() {
        let mut state = session(&[50, 50]);
        state.player_mut(PlayerId::new(0)).shield_active = true;
        state.player_mut(PlayerId::new(1)).shield_active = true;

        let records = fight(&mut state, PlayerId::new(0));

        assert_eq!(records[0].outcome, BattleOutcome::Blocked { holder: PlayerId::new(1) });
        assert!(state.player(PlayerId::new(0)).shield_active);
        assert!(!state.player(PlayerId::new(1)).shield_active);
        assert_eq!(state.player(PlayerId::new(1)).position, 50);
    }

    #[test]
    fn test_mover_shield_spent_once() {
        let mut state = session(&[50, 50, 50]);
        state.player_mut(PlayerId::new(0)).shield_active = true;

        let records = fight(&mut state, PlayerId::new(0));

        assert_eq!(records[0].outcome, BattleOutcome::Blocked { holder: PlayerId::new(0) });
        assert_eq!(records[1].outcome, BattleOutcome::KnockedOut);
        assert_eq!(state.player(PlayerId::new(1)).position, 50);
        assert_eq!(state.player(PlayerId::new(2)).position, START);
        assert_eq!(state.player(PlayerId::new(0)).stats.battles_won, 1);
    }

    #[test]
    fn test_no_battle_on_start() {
        let mut state = session(&[0, 0]);

        let records = fight(&mut state, PlayerId::new(0));

        assert!(records.is_empty());
        assert_eq!(state.player(PlayerId::new(0)).stats.battles_won, 0);
    }
}
