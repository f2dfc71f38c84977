//! Relay configuration read from the environment.

use std::path::PathBuf;
use thiserror::Error;

use crate::dictionary::{DictionaryError, UserDictionary};
use crate::scorer::{DEFAULT_MIN_SCORE, MAX_SCORE, ZxcvbnScorer};

pub const CAPACITY_ENV: &str = "PWD_RELAY_CAPACITY";
pub const MIN_SCORE_ENV: &str = "PWD_RELAY_MIN_SCORE";
pub const DICTIONARY_PATH_ENV: &str = "PWD_RELAY_DICTIONARY_PATH";

pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Buffer size of both ports.
    pub capacity: usize,
    /// Acceptance threshold on the 0-4 scale.
    pub min_score: u8,
    pub dictionary_path: Option<PathBuf>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            min_score: DEFAULT_MIN_SCORE,
            dictionary_path: None,
        }
    }
}

impl RelayConfig {
    /// Reads the configuration from environment variables.
    ///
    /// Priority:
    /// 1. `PWD_RELAY_CAPACITY`, `PWD_RELAY_MIN_SCORE`, `PWD_RELAY_DICTIONARY_PATH`
    /// 2. Defaults (16, 3, no dictionary)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if capacity is not a positive
    /// integer or the score is not in `0..=4`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(CAPACITY_ENV) {
            config.capacity = match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => return Err(invalid(CAPACITY_ENV, raw)),
            };
        }

        if let Ok(raw) = std::env::var(MIN_SCORE_ENV) {
            config.min_score = match raw.trim().parse::<u8>() {
                Ok(score) if score <= MAX_SCORE => score,
                _ => return Err(invalid(MIN_SCORE_ENV, raw)),
            };
        }

        config.dictionary_path = std::env::var(DICTIONARY_PATH_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// Builds the zxcvbn scorer this configuration describes.
    ///
    /// Loads the dictionary file when one is configured.
    pub fn scorer(&self) -> Result<ZxcvbnScorer, ConfigError> {
        let scorer = ZxcvbnScorer::with_min_score(self.min_score);
        match &self.dictionary_path {
            Some(path) => Ok(scorer.with_dictionary(UserDictionary::from_path(path)?)),
            None => Ok(scorer),
        }
    }
}

fn invalid(name: &'static str, value: String) -> ConfigError {
    ConfigError::InvalidValue { name, value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment are #[serial]
        unsafe { std::env::remove_var(key); }
    }

    fn clear_env() {
        remove_env(CAPACITY_ENV);
        remove_env(MIN_SCORE_ENV);
        remove_env(DICTIONARY_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = RelayConfig::from_env().expect("Defaults should load");
        assert_eq!(config, RelayConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_custom() {
        clear_env();
        set_env(CAPACITY_ENV, "4");
        set_env(MIN_SCORE_ENV, " 2 ");
        set_env(DICTIONARY_PATH_ENV, "/etc/pwd-relay/words.txt");

        let config = RelayConfig::from_env().expect("Should load");
        assert_eq!(config.capacity, 4);
        assert_eq!(config.min_score, 2);
        assert_eq!(
            config.dictionary_path,
            Some(PathBuf::from("/etc/pwd-relay/words.txt"))
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_zero_capacity() {
        clear_env();
        set_env(CAPACITY_ENV, "0");

        let result = RelayConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { name: CAPACITY_ENV, .. })
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_score_out_of_range() {
        clear_env();
        set_env(MIN_SCORE_ENV, "5");

        let result = RelayConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { name: MIN_SCORE_ENV, .. })
        ));

        clear_env();
    }

    #[test]
    fn test_scorer_missing_dictionary() {
        let config = RelayConfig {
            dictionary_path: Some(PathBuf::from("/nonexistent/words.txt")),
            ..RelayConfig::default()
        };

        let result = config.scorer();
        assert!(matches!(
            result,
            Err(ConfigError::Dictionary(DictionaryError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_scorer_with_dictionary() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "acme").expect("Failed to write");

        let config = RelayConfig {
            min_score: 1,
            dictionary_path: Some(temp_file.path().to_path_buf()),
            ..RelayConfig::default()
        };

        let scorer = config.scorer().expect("Should build scorer");
        assert_eq!(scorer.min_score(), 1);
        assert!(scorer.dictionary().contains("ACME"));
    }
}
