//! User dictionary management
//!
//! Loads the user-specific words that zxcvbn penalizes when they show up
//! inside a password (account names, site names, product words).

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(feature = "tracing")]
const TRACING_TARGET: &str = "pwd_relay::dictionary";

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Dictionary file is empty")]
    EmptyFile,
}

/// Set of lower-cased words handed to zxcvbn as user inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDictionary {
    words: BTreeSet<String>,
}

impl UserDictionary {
    /// Builds a dictionary from in-memory words.
    ///
    /// Words are trimmed and lower-cased; blanks are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Loads a newline-separated word list from disk.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File holds no words
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!(target: TRACING_TARGET, path = %path.display(), "dictionary file not found");
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let dictionary = Self::from_words(content.lines());

        if dictionary.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!(target: TRACING_TARGET, path = %path.display(), "dictionary file is empty");
            return Err(DictionaryError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            target: TRACING_TARGET,
            words = dictionary.len(),
            path = %path.display(),
            "user dictionary loaded"
        );

        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_lowercase())
    }

    /// Borrows the words in the shape `zxcvbn::zxcvbn` expects.
    pub fn as_inputs(&self) -> Vec<&str> {
        self.words.iter().map(String::as_str).collect()
    }
}
