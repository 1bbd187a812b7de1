//! Game configuration.
//!
//! The board is fixed; what a host may tune is the power-up inventory,
//! the die, and a few presentation limits.

use serde::{Deserialize, Serialize};

/// Fewest players a game may start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game may start with.
pub const MAX_PLAYERS: usize = 4;

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shield charges each player starts with.
    pub shield_charges: u32,

    /// Double-roll charges each player starts with.
    pub double_roll_charges: u32,

    /// Faces on the die. Rolls land in `1..=die_sides`.
    pub die_sides: u8,

    /// How many of the newest move records a display shows.
    pub history_display_len: usize,

    /// Player names are truncated to this many characters.
    pub max_name_len: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            shield_charges: 1,
            double_roll_charges: 1,
            die_sides: 6,
            history_display_len: 5,
            max_name_len: 12,
        }
    }
}

impl GameConfig {
    /// Set the starting shield charges.
    #[must_use]
    pub fn with_shield_charges(mut self, charges: u32) -> Self {
        self.shield_charges = charges;
        self
    }

    /// Set the starting double-roll charges.
    #[must_use]
    pub fn with_double_roll_charges(mut self, charges: u32) -> Self {
        self.double_roll_charges = charges;
        self
    }

    /// Set the number of die faces.
    #[must_use]
    pub fn with_die_sides(mut self, sides: u8) -> Self {
        self.die_sides = sides;
        self
    }

    /// Set how many history entries a display shows.
    #[must_use]
    pub fn with_history_display_len(mut self, len: usize) -> Self {
        self.history_display_len = len;
        self
    }

    /// Set the name length limit.
    #[must_use]
    pub fn with_max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.shield_charges, 1);
        assert_eq!(config.double_roll_charges, 1);
        assert_eq!(config.die_sides, 6);
        assert_eq!(config.history_display_len, 5);
        assert_eq!(config.max_name_len, 12);
    }

    #[test]
    fn test_builder_methods() {
        let config = GameConfig::default()
            .with_shield_charges(3)
            .with_double_roll_charges(0)
            .with_die_sides(8)
            .with_history_display_len(10)
            .with_max_name_len(4);

        assert_eq!(config.shield_charges, 3);
        assert_eq!(config.double_roll_charges, 0);
        assert_eq!(config.die_sides, 8);
        assert_eq!(config.history_display_len, 10);
        assert_eq!(config.max_name_len, 4);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default().with_shield_charges(2);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
