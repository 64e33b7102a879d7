use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{CONNECT, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};

/// Piece colors the terminal front end can draw.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Red,
    Yellow,
    Green,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceColor::Red => "Red",
            PieceColor::Yellow => "Yellow",
            PieceColor::Green => "Green",
            PieceColor::Blue => "Blue",
            PieceColor::Magenta => "Magenta",
            PieceColor::Cyan => "Cyan",
            PieceColor::White => "White",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PieceColor,
    pub two: PieceColor,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PieceColor::Red,
            two: PieceColor::Yellow,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "info" or "connect_four=debug"
    pub filter: String,
    /// Log destination. Logging is off when unset, since stdout belongs to
    /// the terminal UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
            file: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parse a TOML file without validating it, so callers can layer
    /// overrides on top before calling [`AppConfig::validate`].
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`AppConfig::read`], falling back to defaults if the file does not
    /// exist. The flag reports whether the file was found.
    pub fn read_or_default(path: &Path) -> Result<(Self, bool), ConfigError> {
        if path.exists() {
            Ok((Self::read(path)?, true))
        } else {
            Ok((Self::default(), false))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height < CONNECT {
            return Err(ConfigError::Validation(format!(
                "board.height must be >= {CONNECT}"
            )));
        }
        if self.board.width < CONNECT {
            return Err(ConfigError::Validation(format!(
                "board.width must be >= {CONNECT}"
            )));
        }
        if self.board.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.height must be <= {MAX_DIMENSION}"
            )));
        }
        if self.board.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.width must be <= {MAX_DIMENSION}"
            )));
        }
        if self.players.one == self.players.two {
            return Err(ConfigError::Validation(
                "players.one and players.two must have different colors".into(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
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
        assert_eq!(config.board.height, 6);
        assert_eq!(config.board.width, 7);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players]
two = "blue"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.one, PieceColor::Red);
        assert_eq!(config.players.two, PieceColor::Blue);
        assert_eq!(config.board.width, 7);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board.height, DEFAULT_HEIGHT);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_unknown_color_fails_to_parse() {
        let result: Result<AppConfig, _> = toml::from_str("[players]\none = \"purple\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_short_board() {
        let mut config = AppConfig::default();
        config.board.height = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_narrow_board() {
        let mut config = AppConfig::default();
        config.board.width = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_same_colors() {
        let mut config = AppConfig::default();
        config.players.two = PieceColor::Red;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_filter() {
        let mut config = AppConfig::default();
        config.logging.filter = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = AppConfig::default();
        config.board.height = usize::MAX / 2;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.width = MAX_DIMENSION + 1;
        assert!(config.validate().is_err());

        config.board.width = MAX_DIMENSION;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_read_or_default_missing_file() {
        let (config, found) =
            AppConfig::read_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert!(!found);
        assert_eq!(config.board.height, 6);
    }

    #[test]
    fn test_read_does_not_validate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.toml");
        std::fs::write(&path, "[board]\nheight = 2\n").unwrap();

        let (mut config, found) = AppConfig::read_or_default(&path).unwrap();
        assert!(found);
        assert_eq!(config.board.height, 2);
        assert!(config.validate().is_err());

        config.board.height = 6;
        config.validate().expect("override should make the config valid");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
height = 8
width = 9

[logging]
file = "game.log"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.height, 8);
        assert_eq!(config.board.width, 9);
        assert_eq!(config.logging.file, Some(PathBuf::from("game.log")));
        // Others are defaults
        assert_eq!(config.players.one, PieceColor::Red);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nheight = 2\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = AppConfig::load(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config.players.two, PieceColor::Yellow);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(PieceColor::Magenta.to_string(), "Magenta");
    }
}
