use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, MIN_DIMENSION};
use crate::search::{DEFAULT_DEPTH, MAX_DEPTH};
use crate::GameError;

/// Settings for one game. Missing fields fall back to the classic 7x6 board,
/// player one moving first and a one-ply computer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Player two is played by the computer.
    pub vs_computer: bool,
    pub starting_player: Player,
    pub search_depth: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vs_computer: false,
            starting_player: Player::One,
            search_depth: DEFAULT_DEPTH,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        let allowed = MIN_DIMENSION..=MAX_DIMENSION;
        if !allowed.contains(&self.width) {
            return Err(GameError::Config(format!(
                "width must be between {MIN_DIMENSION} and {MAX_DIMENSION}, got {}",
                self.width
            )));
        }
        if !allowed.contains(&self.height) {
            return Err(GameError::Config(format!(
                "height must be between {MIN_DIMENSION} and {MAX_DIMENSION}, got {}",
                self.height
            )));
        }
        if !(1..=MAX_DEPTH).contains(&self.search_depth) {
            return Err(GameError::Config(format!(
                "search_depth must be between 1 and {MAX_DEPTH}, got {}",
                self.search_depth
            )));
        }
        Ok(())
    }

    pub fn with_computer(mut self, vs_computer: bool) -> Self {
        self.vs_computer = vs_computer;
        self
    }

    pub fn board(&self) -> Result<Board, GameError> {
        Board::new(self.width, self.height, self.vs_computer, self.starting_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        let board = config.board().unwrap();
        assert_eq!((board.width(), board.height()), (7, 6));
        assert_eq!(board.current_player(), Player::One);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
width = 9
starting_player = "two"
"#,
        )
        .unwrap();
        assert_eq!(config.width, 9);
        assert_eq!(config.height, 6);
        assert_eq!(config.starting_player, Player::Two);
        assert_eq!(config.search_depth, 1);
        assert!(!config.vs_computer);
    }

    #[test]
    fn validation_rejects_out_of_range_values() {
        let mut config = GameConfig::default();
        config.width = 3;
        assert!(matches!(config.validate(), Err(GameError::Config(_))));

        let mut config = GameConfig::default();
        config.height = 20;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.search_depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn serialized_config_reads_back() {
        let config = GameConfig::default().with_computer(true);
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("starting_player = \"one\""));
        let parsed: GameConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
