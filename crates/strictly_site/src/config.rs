//! Site configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strictly_contact::{FormTimings, PhoneFormat};
use strictly_memory::{Difficulty, GameTimings};
use tracing::{debug, info, instrument};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_site.toml";

/// Top-level configuration. Every field has a default.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// SQLite file holding best scores.
    db_path: PathBuf,
    /// Log file used while the terminal UI is running.
    log_path: PathBuf,
    /// Memory game settings.
    game: GameConfig,
    /// Contact form settings.
    form: FormConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("strictly_site.db"),
            log_path: PathBuf::from("strictly_site.log"),
            game: GameConfig::default(),
            form: FormConfig::default(),
        }
    }
}

/// `[game]` section.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Ticker period in milliseconds.
    tick_ms: u64,
    /// How long a mismatched pair stays visible, in milliseconds.
    reveal_ms: u64,
    /// Board size used at startup.
    default_difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            reveal_ms: 1000,
            default_difficulty: Difficulty::Easy,
        }
    }
}

impl GameConfig {
    /// Session delays.
    pub fn timings(&self) -> GameTimings {
        GameTimings {
            tick: Duration::from_millis(self.tick_ms),
            reveal: Duration::from_millis(self.reveal_ms),
        }
    }
}

/// `[form]` section.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Confirmation popup lifetime in milliseconds.
    popup_ms: u64,
    /// Country calling code without the plus sign.
    country_code: String,
    /// Digits kept after the country code.
    national_digits: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            popup_ms: 2500,
            country_code: "370".to_string(),
            national_digits: 8,
        }
    }
}

impl FormConfig {
    /// Form delays.
    pub fn timings(&self) -> FormTimings {
        FormTimings {
            popup: Duration::from_millis(self.popup_ms),
        }
    }

    /// Phone layout.
    pub fn phone_format(&self) -> PhoneFormat {
        PhoneFormat::new(&self.country_code, self.national_digits)
    }
}

impl SiteConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid TOML, does not match
    /// the expected shape, or holds values that cannot be used.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(db_path = %config.db_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be used.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the database path.
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.game.tick_ms == 0 {
            return Err(ConfigError::new("game.tick_ms must be positive"));
        }
        let code = &self.form.country_code;
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::new(format!(
                "form.country_code must be digits, got '{}'",
                code
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
