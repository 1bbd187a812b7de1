//! The turn engine.
//!
//! One call to [`TurnEngine::roll_dice`] resolves a whole turn:
//!
//! 1. roll the die and walk one square at a time, stopping at the finish
//! 2. apply a snake (unless shielded) or ladder on the landing square
//! 3. battle every other player sharing the square
//! 4. record the move
//! 5. end the game on the finish, or roll again for a pending double
//!    roll, or pass the turn
//!
//! Events are emitted in that order. Rolls and power-up activations made
//! outside `Phase::AwaitingRoll` are ignored.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, JumpKind, FINISH};
use crate::core::{Dice, GameConfig, GameRng, MoveRecord, Phase, PlayerId, Redirect, Session};
use crate::events::{EventSink, NullSink, Threat, TurnEvent};

use super::battle::resolve_battles;
use super::setup::{roster, seat_players, Entrant, SetupError};

/// How a resolution ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnFinish {
    /// The turn passed to `next`.
    TurnAdvanced { next: PlayerId },
    /// `winner` reached the finish.
    GameOver { winner: PlayerId },
}

/// Everything one `roll_dice` call did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Who rolled.
    pub player: PlayerId,

    /// Die faces in order. Two entries when a double roll fired.
    pub rolls: SmallVec<[u8; 2]>,

    /// Every event, in the order it happened.
    pub events: Vec<TurnEvent>,

    pub finish: TurnFinish,
}

/// Forwards events to the host sink and keeps a copy for the resolution.
pub(super) struct Emitter<'a> {
    sink: &'a mut dyn EventSink,
    events: Vec<TurnEvent>,
}

impl<'a> Emitter<'a> {
    pub(super) fn new(sink: &'a mut dyn EventSink) -> Self {
        Self {
            sink,
            events: Vec::new(),
        }
    }

    pub(super) fn emit(&mut self, event: TurnEvent, session: &Session) {
        self.sink.on_event(&event, session);
        self.events.push(event);
    }
}

/// Owns a session and applies the rules to it.
///
/// Generic over the dice so tests and replays can script every roll.
#[derive(Clone, Debug)]
pub struct TurnEngine<D = GameRng> {
    board: Board,
    config: GameConfig,
    dice: D,
    session: Session,
}

impl<D: Dice> TurnEngine<D> {
    pub(crate) fn from_parts(board: Board, config: GameConfig, dice: D, session: Session) -> Self {
        Self {
            board,
            config,
            dice,
            session,
        }
    }

    /// Replace the session with a fresh game on the same board, config and dice.
    ///
    /// On error the current session is left untouched.
    pub fn start_game(&mut self, entrants: &[Entrant]) -> Result<(), SetupError> {
        self.session = Session::new(seat_players(entrants, &self.config)?);
        info!("starting game: {}", roster(&self.session));
        Ok(())
    }

    // === Views ===

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access for arranging positions in puzzles and tests.
    /// Changes made here bypass the rules.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Owned copy of the session for a renderer. O(1) history clone.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session.clone()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// The newest moves a history panel shows, newest first.
    /// Length comes from `GameConfig::history_display_len`.
    #[must_use]
    pub fn recent_history(&self) -> Vec<&MoveRecord> {
        self.session.recent_history(self.config.history_display_len)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.session.winner
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    // === Power-ups ===

    /// Raise the current player's shield.
    ///
    /// Returns false (and changes nothing) outside `AwaitingRoll`, with no
    /// charges left, or when a shield is already up.
    pub fn activate_shield(&mut self) -> bool {
        if self.session.phase != Phase::AwaitingRoll {
            return false;
        }
        let current = self.session.current();
        if current.power_ups.shield_charges == 0 || current.shield_active {
            return false;
        }

        let id = self.session.current_player;
        let player = self.session.player_mut(id);
        player.shield_active = true;
        player.power_ups.shield_charges -= 1;
        debug!("{} raised a shield", player.name);
        true
    }

    /// Queue an extra roll for the current player's next resolution.
    ///
    /// Returns false (and changes nothing) outside `AwaitingRoll`, with no
    /// charges left, or when a double roll is already pending.
    pub fn activate_double_roll(&mut self) -> bool {
        if self.session.phase != Phase::AwaitingRoll || self.session.pending_double_roll {
            return false;
        }
        if self.session.current().power_ups.double_roll_charges == 0 {
            return false;
        }

        let id = self.session.current_player;
        let player = self.session.player_mut(id);
        player.power_ups.double_roll_charges -= 1;
        debug!("{} queued a double roll", player.name);
        self.session.pending_double_roll = true;
        true
    }

    // === Rolling ===

    /// Resolve a full turn for the current player.
    ///
    /// Returns `None` without touching the session if a roll is not
    /// allowed right now (game over, or mid-resolution).
    pub fn roll_dice(&mut self) -> Option<Resolution> {
        self.roll_dice_with(&mut NullSink)
    }

    /// Like [`roll_dice`](Self::roll_dice), also feeding each event to `sink`
    /// as it happens.
    pub fn roll_dice_with(&mut self, sink: &mut dyn EventSink) -> Option<Resolution> {
        if self.session.phase != Phase::AwaitingRoll {
            debug!("roll ignored in phase {:?}", self.session.phase);
            return None;
        }

        let player = self.session.current_player;
        let mut out = Emitter::new(sink);
        let mut rolls = SmallVec::new();

        let finish = loop {
            rolls.push(self.resolve_roll(player, &mut out));

            if self.session.player(player).position == FINISH {
                self.session.phase = Phase::GameOver;
                self.session.winner = Some(player);
                self.session.pending_double_roll = false;
                info!("{} wins", self.session.player(player).name);
                out.emit(TurnEvent::GameOver { winner: player }, &self.session);
                break TurnFinish::GameOver { winner: player };
            }

            if self.session.pending_double_roll {
                self.session.pending_double_roll = false;
                debug!("{} rolls again", self.session.player(player).name);
                out.emit(TurnEvent::DoubleRoll { player }, &self.session);
                continue;
            }

            let next = player.next(self.session.player_count());
            self.session.current_player = next;
            self.session.turn_number += 1;
            self.session.phase = Phase::AwaitingRoll;
            out.emit(
                TurnEvent::TurnAdvanced {
                    next,
                    turn: self.session.turn_number,
                },
                &self.session,
            );
            break TurnFinish::TurnAdvanced { next };
        };
        debug_assert!(self.session.phase.is_stable());

        Some(Resolution {
            player,
            rolls,
            events: out.events,
            finish,
        })
    }

    /// One die roll: walk, jump, battle, record. Returns the face rolled.
    fn resolve_roll(&mut self, player: PlayerId, out: &mut Emitter<'_>) -> u8 {
        self.session.phase = Phase::Rolling;

        let value = self.dice.roll(self.config.die_sides);
        let sequence = self.session.roll_count;
        self.session.roll_count += 1;
        self.session.player_mut(player).stats.rolls_taken += 1;

        let from = self.session.player(player).position;
        debug!("{} rolled {} from {}", self.session.player(player).name, value, from);
        out.emit(TurnEvent::DiceRolled { player, value }, &self.session);

        for _ in 0..value {
            let square = self.session.player(player).position;
            if square >= FINISH {
                break;
            }
            self.session.player_mut(player).position = square + 1;
            trace!("{} steps to {}", player, square + 1);
            out.emit(TurnEvent::Stepped { player, square: square + 1 }, &self.session);
        }
        let landed = self.session.player(player).position;

        self.session.phase = Phase::Resolving;
        let redirect = self.apply_jump(player, out);
        let battles = resolve_battles(&mut self.session, player, out);

        let mover = self.session.player(player);
        let record = MoveRecord {
            turn: self.session.turn_number,
            sequence,
            player,
            name: mover.name.clone(),
            token: mover.token.clone(),
            roll: value,
            from,
            landed,
            to: mover.position,
            redirect,
            battles,
        };
        debug!("{}", record);
        self.session.record_move(record);

        value
    }

    /// Apply the snake or ladder starting on the player's square, if any.
    fn apply_jump(&mut self, player: PlayerId, out: &mut Emitter<'_>) -> Option<Redirect> {
        let square = self.session.player(player).position;
        let jump = self.board.jump_from(square)?;
        let mover = self.session.player_mut(player);

        let (redirect, event) = match jump.kind {
            JumpKind::Snake if mover.shield_active => {
                mover.shield_active = false;
                (
                    Redirect::Blocked { jump },
                    TurnEvent::ShieldBlocked {
                        holder: player,
                        threat: Threat::Snake,
                        square,
                    },
                )
            }
            JumpKind::Snake => {
                mover.position = jump.to;
                mover.stats.snakes_hit += 1;
                (
                    Redirect::Taken { jump },
                    TurnEvent::Snake {
                        player,
                        from: jump.from,
                        to: jump.to,
                    },
                )
            }
            JumpKind::Ladder => {
                mover.position = jump.to;
                mover.stats.ladders_hit += 1;
                (
                    Redirect::Taken { jump },
                    TurnEvent::Ladder {
                        player,
                        from: jump.from,
                        to: jump.to,
                    },
                )
            }
        };

        debug!("{}", event);
        out.emit(event, &self.session);
        Some(redirect)
    }
}
