use std::path::PathBuf;

/// Errors raised by the board and the game engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid game state: {0}")]
    InvalidState(String),

    #[error("position (row {row}, column {col}) is outside the {width}x{height} board")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("agent selected illegal column {column} (open: {open:?})")]
    IllegalMove { column: usize, open: Vec<usize> },
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
    fn test_invalid_state_display() {
        let err = GameError::InvalidState("cannot add players in the middle of a game".into());
        assert_eq!(
            err.to_string(),
            "invalid game state: cannot add players in the middle of a game"
        );
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = GameError::IndexOutOfRange {
            row: 0,
            col: 9,
            width: 7,
            height: 6,
        };
        assert_eq!(
            err.to_string(),
            "position (row 0, column 9) is outside the 7x6 board"
        );
    }

    #[test]
    fn test_illegal_move_display() {
        let err = GameError::IllegalMove {
            column: 5,
            open: vec![0, 1, 2],
        };
        assert_eq!(
            err.to_string(),
            "agent selected illegal column 5 (open: [0, 1, 2])"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.width must be >= 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.width must be >= 4"
        );
    }
}
