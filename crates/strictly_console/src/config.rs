//! Console configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Presentation settings for the console front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct ConsoleConfig {
    /// Symbol drawn for the first player's marks.
    first_mark: char,

    /// Symbol drawn for the second player's marks.
    second_mark: char,

    /// Clear the screen before every frame.
    clear_screen: bool,

    /// Print feedback messages in red.
    color: bool,

    /// Wait for a key press after a finished game.
    pause_on_exit: bool,

    /// Fallback tracing filter when `RUST_LOG` is not set.
    #[setters(into)]
    log_filter: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            first_mark: 'O',
            second_mark: 'X',
            clear_screen: true,
            color: true,
            pause_on_exit: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Picks the config file for a run.
    ///
    /// An explicit path is used as given. Without one, [`DEFAULT_CONFIG_FILE`]
    /// under `base` is used if it exists.
    pub fn locate(base: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Some(base.join(DEFAULT_CONFIG_FILE)).filter(|path| path.is_file()),
        }
    }

    /// Resolves the configuration relative to `base`.
    ///
    /// An explicit path must exist. Without a file, built-in defaults apply.
    #[instrument]
    pub fn load_in(base: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::locate(base, explicit) {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Resolves the configuration relative to the working directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_in(Path::new("."), explicit)
    }

    /// Checks that the two marks can be told apart on screen.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for mark in [self.first_mark, self.second_mark] {
            if mark.is_whitespace() || mark.is_control() {
                return Err(ConfigError::new(format!(
                    "Mark {:?} is not a visible character",
                    mark
                )));
            }
        }
        if self.first_mark == self.second_mark {
            return Err(ConfigError::new(format!(
                "Both players use the mark {:?}",
                self.first_mark
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = ConsoleConfig::from_toml("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(*config.first_mark(), 'O');
        assert_eq!(*config.second_mark(), 'X');
    }

    #[test]
    fn test_partial_file_overrides() {
        let config = ConsoleConfig::from_toml(
            r##"
            second_mark = "#"
            clear_screen = false
            "##,
        )
        .unwrap();
        assert_eq!(*config.first_mark(), 'O');
        assert_eq!(*config.second_mark(), '#');
        assert!(!*config.clear_screen());
        assert!(*config.color());
    }

    #[test]
    fn test_identical_marks_rejected() {
        let err = ConsoleConfig::from_toml(r#"first_mark = "X""#).unwrap_err();
        assert!(err.message.contains("Both players"), "{err}");
    }

    #[test]
    fn test_blank_mark_rejected() {
        let err = ConsoleConfig::from_toml(r#"first_mark = " ""#).unwrap_err();
        assert!(err.message.contains("not a visible"), "{err}");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ConsoleConfig::from_toml("board_size = 4").unwrap_err();
        assert!(err.message.contains("Failed to parse"), "{err}");
    }

    #[test]
    fn test_default_file_in_base_dir_is_used() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "first_mark = \"A\"\npause_on_exit = false\n",
        )
        .unwrap();

        let config = ConsoleConfig::load_in(dir.path(), None).unwrap();
        assert_eq!(*config.first_mark(), 'A');
        assert!(!*config.pause_on_exit());
        assert_eq!(
            ConsoleConfig::locate(dir.path(), None),
            Some(dir.path().join(DEFAULT_CONFIG_FILE))
        );
    }

    #[test]
    fn test_absent_default_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(ConsoleConfig::locate(dir.path(), None), None);
        assert_eq!(
            ConsoleConfig::load_in(dir.path(), None).unwrap(),
            ConsoleConfig::default()
        );
    }

    #[test]
    fn test_explicit_path_wins_over_default_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "first_mark = \"A\"").unwrap();
        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "first_mark = \"Z\"").unwrap();

        let config = ConsoleConfig::load_in(dir.path(), Some(explicit.as_path())).unwrap();
        assert_eq!(*config.first_mark(), 'Z');
    }

    #[test]
    fn test_setters_chain() {
        let config = ConsoleConfig::default()
            .with_color(false)
            .with_log_filter("debug");
        assert!(!*config.color());
        assert_eq!(config.log_filter(), "debug");
    }
}
