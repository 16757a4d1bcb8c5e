use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Game settings: where the save file lives and how the AI seeds its RNG.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub save_path: PathBuf,
    /// Fixed planner seed; omit for OS entropy.
    pub ai_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            save_path: PathBuf::from("game_save.dat"),
            ai_seed: None,
        }
    }
}

/// Presentation settings. The thinking delay is purely cosmetic; the core
/// move call is synchronous.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub thinking_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            thinking_delay_ms: 1500,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.save_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "game.save_path must not be empty".into(),
            ));
        }
        if self.ui.thinking_delay_ms > 60_000 {
            return Err(ConfigError::Validation(
                "ui.thinking_delay_ms must be <= 60000".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.save_path, PathBuf::from("game_save.dat"));
        assert_eq!(config.ui.thinking_delay_ms, 1500);
        assert!(config.game.ai_seed.is_none());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.thinking_delay_ms, 1500);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[ui]
thinking_delay_ms = 250
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.thinking_delay_ms, 250);
        assert_eq!(config.game.save_path, PathBuf::from("game_save.dat"));
    }

    #[test]
    fn test_validation_rejects_empty_save_path() {
        let mut config = AppConfig::default();
        config.game.save_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_excessive_delay() {
        let mut config = AppConfig::default();
        config.ui.thinking_delay_ms = 120_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.ui.thinking_delay_ms, 1500);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
save_path = "saves/session.dat"
ai_seed = 42
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.save_path, PathBuf::from("saves/session.dat"));
        assert_eq!(config.game.ai_seed, Some(42));
        assert_eq!(config.ui.thinking_delay_ms, 1500);
    }
}
