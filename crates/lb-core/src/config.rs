use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration loaded from `~/.leadboard/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub data: DataConfig,
}

impl Config {
    /// Load config from `~/.leadboard/config.toml`, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(path)
        } else {
            let cfg = Config::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let cfg: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Semantic validation for settings that are not fully expressible via type checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()
    }

    /// Directory holding config, log file and optional seed data.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".leadboard")
    }

    fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Where the interactive UI writes its log.
    pub fn log_path(&self) -> PathBuf {
        self.general
            .log_file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::home_dir().join("leadboard.log"))
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Section structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_project_name")]
    pub project_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_json: bool,
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            log_level: default_log_level(),
            log_json: false,
            log_file: None,
        }
    }
}

fn default_project_name() -> String {
    "leadboard".into()
}
fn default_log_level() -> String {
    "warn".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Wrapped lines of notes shown on a lead card before clamping.
    #[serde(default = "default_notes_lines")]
    pub notes_lines: u16,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            notes_lines: default_notes_lines(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notes_lines == 0 {
            return Err(ConfigError::Validation(
                "board.notes_lines must be at least 1".to_string(),
            ));
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Validation(
                "board.currency_symbol must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_notes_lines() -> u16 {
    2
}
fn default_currency_symbol() -> String {
    "$".into()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON array of leads to start from instead of the built-in samples.
    #[serde(default)]
    pub seed_file: Option<String>,
}
