use std::path::PathBuf;

use crate::save::RECORD_LEN;

/// Errors that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("product {0} is not on the board or out of range")]
    InvalidProduct(i32),

    #[error("cell {0} is already taken")]
    CellTaken(usize),

    #[error("no game in progress")]
    GameOver,

    #[error("computer has no legal factor")]
    NoLegalFactor,
}

/// Errors that can occur during save-file operations.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("no saved game at {0}")]
    FileAbsent(PathBuf),

    #[error("save file is {actual} bytes, expected {expected}")]
    ShortRead { expected: usize, actual: usize },

    #[error("invalid owner code {0} in save file")]
    BadOwnerCode(i32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SaveError {
    /// Wrong-length error for a record that should span the full fixed layout.
    pub(crate) fn short_read(actual: usize) -> Self {
        SaveError::ShortRead {
            expected: RECORD_LEN,
            actual,
        }
    }
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
        assert_eq!(
            MoveError::InvalidProduct(11).to_string(),
            "product 11 is not on the board or out of range"
        );
        assert_eq!(
            MoveError::CellTaken(21).to_string(),
            "cell 21 is already taken"
        );
    }

    #[test]
    fn test_save_error_display() {
        let err = SaveError::short_read(12);
        assert_eq!(err.to_string(), "save file is 12 bytes, expected 160");

        let err = SaveError::FileAbsent(PathBuf::from("game_save.dat"));
        assert_eq!(err.to_string(), "no saved game at game_save.dat");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ui.thinking_delay_ms must be <= 60000".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ui.thinking_delay_ms must be <= 60000"
        );
    }
}
