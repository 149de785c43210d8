use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use matchpoints_core::RulesConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Scorekeeper configuration, loaded from `matchpoints.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where the current round is saved between invocations.
    pub save_path: PathBuf,
    /// Start new rounds with every hole pre-filled at par.
    pub prefill_par: bool,
    /// Rules applied to new rounds.
    pub rules: RulesConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("matchpoints-save.json"),
            prefill_par: false,
            rules: RulesConfig::default(),
        }
    }
}

/// On-disk shape of the config file. `rules` stays `None` when the file has
/// no `[rules]` table so the caller can pick the fallback.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ConfigFile {
    save_path: PathBuf,
    prefill_par: bool,
    rules: Option<RulesConfig>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let defaults = AppConfig::default();
        Self {
            save_path: defaults.save_path,
            prefill_par: defaults.prefill_par,
            rules: None,
        }
    }
}

impl AppConfig {
    /// Parse a config file. A missing `[rules]` table means default rules.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, RulesConfig::default)
    }

    fn parse(
        contents: &str,
        fallback_rules: impl FnOnce() -> RulesConfig,
    ) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(Self {
            save_path: file.save_path,
            prefill_par: file.prefill_par,
            rules: file.rules.unwrap_or_else(fallback_rules),
        })
    }

    /// Load config from `path` if it exists, then apply env var overrides.
    ///
    /// Without a `[rules]` table the rules come from `RulesConfig::load`.
    pub fn load(path: &Path) -> Self {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents, RulesConfig::load) {
                Ok(cfg) => {
                    tracing::info!(path = %path.display(), "loaded configuration");
                    cfg
                },
                Err(e) => {
                    tracing::warn!(path = %path.display(), "{e}, using defaults");
                    Self::with_loaded_rules()
                },
            },
            Err(_) => {
                tracing::info!(path = %path.display(), "no config file found, using defaults");
                Self::with_loaded_rules()
            },
        };
        config.apply_env_overrides();
        config
    }

    fn with_loaded_rules() -> Self {
        Self {
            rules: RulesConfig::load(),
            ..Self::default()
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("MATCHPOINTS_SAVE")
            && !path.is_empty()
        {
            self.save_path = PathBuf::from(path);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.save_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("save_path must not be empty".to_string()));
        }
        if self.save_path.is_dir() {
            return Err(ConfigError::Invalid(format!(
                "save_path {} is a directory",
                self.save_path.display()
            )));
        }
        Ok(())
    }
}
