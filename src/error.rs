use std::path::PathBuf;

/// Reasons a move is refused. [`crate::game::GameSession::apply_move`] turns
/// all of them into `MoveResult::Ignored`; `try_apply_move` reports them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is already over")]
    SessionTerminated,

    #[error("column {column} is outside the board (width {width})")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Errors that can occur when setting up a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board dimensions must be positive, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::ColumnOutOfRange {
            column: 9,
            width: 7,
        };
        assert_eq!(err.to_string(), "column 9 is outside the board (width 7)");
        assert_eq!(
            MoveError::ColumnFull { column: 3 }.to_string(),
            "column 3 is full"
        );
    }

    #[test]
    fn test_game_error_display() {
        let err = GameError::InvalidDimensions {
            height: 0,
            width: 7,
        };
        assert_eq!(
            err.to_string(),
            "board dimensions must be positive, got 0x7"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.height must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.height must be > 0"
        );
    }
}
