//! Game setup: entrants, validation, and the engine builder.

use log::info;

use crate::board::Board;
use crate::core::{
    Dice, GameConfig, GameRng, Player, PlayerId, PlayerMap, PowerUps, Session, MAX_PLAYERS,
    MIN_PLAYERS,
};

use super::engine::TurnEngine;

/// Avatar used for a seat whose entrant left the token blank.
pub const DEFAULT_TOKENS: [&str; MAX_PLAYERS] = ["🦄", "🦊", "🐼", "🐧"];

/// Someone joining the game, as typed into a setup form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entrant {
    pub name: String,
    pub token: String,
}

impl Entrant {
    pub fn new(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
        }
    }
}

/// Reasons a game cannot start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("a game needs {min} to {max} players, got {count}", min = MIN_PLAYERS, max = MAX_PLAYERS)]
    PlayerCount { count: usize },

    #[error("the die needs at least one side")]
    InvalidDieSides,
}

/// Turn entrants into seated players.
///
/// Names are trimmed and cut to `max_name_len` characters; blank names
/// become `Player N`. Blank tokens fall back to the seat's default avatar.
pub(crate) fn seat_players(
    entrants: &[Entrant],
    config: &GameConfig,
) -> Result<PlayerMap<Player>, SetupError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&entrants.len()) {
        return Err(SetupError::PlayerCount {
            count: entrants.len(),
        });
    }
    if config.die_sides == 0 {
        return Err(SetupError::InvalidDieSides);
    }

    let power_ups = PowerUps {
        shield_charges: config.shield_charges,
        double_roll_charges: config.double_roll_charges,
    };

    let players = entrants
        .iter()
        .enumerate()
        .map(|(seat, entrant)| {
            let name: String = entrant.name.trim().chars().take(config.max_name_len).collect();
            let name = if name.is_empty() {
                format!("Player {}", seat + 1)
            } else {
                name
            };

            let token = entrant.token.trim();
            let token = if token.is_empty() {
                DEFAULT_TOKENS[seat % DEFAULT_TOKENS.len()]
            } else {
                token
            };

            Player::new(name, token, power_ups)
        })
        .collect();

    Ok(PlayerMap::from_vec(players))
}

/// Builder for a [`TurnEngine`].
///
/// ```
/// use snakes_ladders::rules::GameBuilder;
///
/// let engine = GameBuilder::new()
///     .player("Ada", "🦊")
///     .player("Bo", "")
///     .build(42)
///     .unwrap();
///
/// assert_eq!(engine.session().player_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    board: Board,
    entrants: Vec<Entrant>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Play on a custom (already validated) board.
    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Add a seat. Turn order follows call order.
    pub fn player(mut self, name: impl Into<String>, token: impl Into<String>) -> Self {
        self.entrants.push(Entrant::new(name, token));
        self
    }

    pub fn players(mut self, entrants: impl IntoIterator<Item = Entrant>) -> Self {
        self.entrants.extend(entrants);
        self
    }

    /// Build with seeded dice.
    pub fn build(self, seed: u64) -> Result<TurnEngine<GameRng>, SetupError> {
        self.build_with_dice(GameRng::new(seed))
    }

    /// Build with any dice, e.g. `ScriptedDice` for a fixed sequence.
    pub fn build_with_dice<D: Dice>(self, dice: D) -> Result<TurnEngine<D>, SetupError> {
        let session = Session::new(seat_players(&self.entrants, &self.config)?);
        info!("starting game: {}", roster(&session));
        Ok(TurnEngine::from_parts(self.board, self.config, dice, session))
    }
}

/// Seat names in order, for logging.
pub(crate) fn roster(session: &Session) -> String {
    session
        .player_ids()
        .map(|id: PlayerId| session.player(id).name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entrants(names: &[&str]) -> Vec<Entrant> {
        names.iter().map(|n| Entrant::new(*n, "")).collect()
    }

    #[test]
    fn test_player_count_bounds() {
        let config = GameConfig::default();

        assert_eq!(
            seat_players(&entrants(&["a"]), &config).unwrap_err(),
            SetupError::PlayerCount { count: 1 }
        );
        assert_eq!(
            seat_players(&entrants(&["a", "b", "c", "d", "e"]), &config).unwrap_err(),
            SetupError::PlayerCount { count: 5 }
        );
        assert!(seat_players(&entrants(&["a", "b"]), &config).is_ok());
        assert!(seat_players(&entrants(&["a", "b", "c", "d"]), &config).is_ok());
    }

    #[test]
    fn test_names_trimmed_truncated_and_defaulted() {
        let config = GameConfig::default();
        let players =
            seat_players(&entrants(&["  Ada  ", "", "Bartholomew-the-Bold"]), &config).unwrap();

        assert_eq!(players[PlayerId::new(0)].name, "Ada");
        assert_eq!(players[PlayerId::new(1)].name, "Player 2");
        assert_eq!(players[PlayerId::new(2)].name, "Bartholomew-");
    }

    #[test]
    fn test_default_tokens_per_seat() {
        let config = GameConfig::default();
        let mut list = entrants(&["a", "b", "c"]);
        list[1].token = "🐉".to_string();

        let players = seat_players(&list, &config).unwrap();

        assert_eq!(players[PlayerId::new(0)].token, "🦄");
        assert_eq!(players[PlayerId::new(1)].token, "🐉");
        assert_eq!(players[PlayerId::new(2)].token, "🐼");
    }

    #[test]
    fn test_charges_from_config() {
        let config = GameConfig::default()
            .with_shield_charges(2)
            .with_double_roll_charges(3);
        let players = seat_players(&entrants(&["a", "b"]), &config).unwrap();

        for (_, p) in players.iter() {
            assert_eq!(p.power_ups.shield_charges, 2);
            assert_eq!(p.power_ups.double_roll_charges, 3);
        }
    }

    #[test]
    fn test_zero_sided_die_rejected() {
        let config = GameConfig::default().with_die_sides(0);
        assert_eq!(
            seat_players(&entrants(&["a", "b"]), &config).unwrap_err(),
            SetupError::InvalidDieSides
        );
    }

    #[test]
    fn test_builder() {
        let engine = GameBuilder::new()
            .player("Ada", "🦊")
            .players(entrants(&["Bo", "Cy"]))
            .build(7)
            .unwrap();

        let session = engine.session();
        assert_eq!(session.player_count(), 3);
        assert_eq!(session.player(PlayerId::new(2)).name, "Cy");
        assert_eq!(roster(session), "Ada, Bo, Cy");
    }

    #[test]
    fn test_error_message() {
        let err = SetupError::PlayerCount { count: 7 };
        assert_eq!(err.to_string(), "a game needs 2 to 4 players, got 7");
    }
}
