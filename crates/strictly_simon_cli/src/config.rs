//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_simon::{MAX_CAPACITY, MIN_LENGTH};
use tracing::{debug, info, instrument};

/// Tunables for sequence generation and the play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SimonConfig {
    /// Sequence length in round 1.
    start_length: usize,

    /// Colors added per round after the first.
    growth: usize,

    /// Rounds to play before the session ends (0 = until a miss).
    max_rounds: u32,

    /// Tracing filter used when `RUST_LOG` is unset.
    log_level: String,

    /// Fixed RNG seed for reproducible sequences.
    seed: Option<u64>,
}

impl Default for SimonConfig {
    fn default() -> Self {
        Self {
            start_length: MIN_LENGTH,
            growth: 1,
            max_rounds: 0,
            log_level: "warn".to_string(),
            seed: None,
        }
    }
}

impl SimonConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        config.validate()?;
        info!(
            start_length = config.start_length,
            growth = config.growth,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads configuration, falling back to defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that the values describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_LENGTH..=MAX_CAPACITY).contains(&self.start_length) {
            return Err(ConfigError::new(format!(
                "start_length must be in [{}, {}], got {}",
                MIN_LENGTH, MAX_CAPACITY, self.start_length
            )));
        }
        if self.growth > MAX_CAPACITY {
            return Err(ConfigError::new(format!(
                "growth must be <= {}, got {}",
                MAX_CAPACITY, self.growth
            )));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::new("log_level must not be empty".to_string()));
        }
        Ok(())
    }

    /// Replaces the seed when `seed` is set (command-line override).
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Replaces the round limit when `max_rounds` is set (command-line override).
    pub fn with_max_rounds(mut self, max_rounds: Option<u32>) -> Self {
        if let Some(max_rounds) = max_rounds {
            self.max_rounds = max_rounds;
        }
        self
    }

    /// Renders the default configuration as TOML.
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default()).map_err(|e| {
            ConfigError::new(format!("Failed to serialize default config: {}", e))
        })
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
    fn test_default_config_is_valid() {
        SimonConfig::default()
            .validate()
            .expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SimonConfig = toml::from_str("growth = 2\n").unwrap();
        assert_eq!(*config.growth(), 2);
        assert_eq!(*config.start_length(), MIN_LENGTH);
        assert_eq!(config.seed(), &None);
    }

    #[test]
    fn test_validation_rejects_short_start() {
        let config: SimonConfig = toml::from_str("start_length = 3\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("start_length"));
    }

    #[test]
    fn test_validation_rejects_start_past_capacity() {
        let config: SimonConfig = toml::from_str("start_length = 33\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_only_apply_when_set() {
        let config: SimonConfig = toml::from_str("seed = 5\nmax_rounds = 3\n").unwrap();

        let kept = config.clone().with_seed(None).with_max_rounds(None);
        assert_eq!(kept, config);

        let replaced = config.with_seed(Some(9)).with_max_rounds(Some(1));
        assert_eq!(replaced.seed(), &Some(9));
        assert_eq!(*replaced.max_rounds(), 1);
    }

    #[test]
    fn test_default_toml_parses_back() {
        let rendered = SimonConfig::default_toml().unwrap();
        let parsed: SimonConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, SimonConfig::default());
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
