//! Game configuration
//!
//! Settings come from an optional JSON file and are overridden by command-line
//! flags. The engine itself never reads configuration; `main` resolves it and
//! passes plain values in.

use crate::wordlists::{WordStore, loader};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Difficulty presets mapping to a wrong-guess limit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Create difficulty from name string
    ///
    /// Supported names: "easy", "normal", "hard".
    /// Defaults to normal if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Normal,
        }
    }

    /// Wrong guesses allowed before the round is lost
    #[must_use]
    pub const fn max_wrong_guesses(self) -> usize {
        match self {
            Self::Easy => 10,
            Self::Normal => 7,
            Self::Hard => 4,
        }
    }
}

/// Contents of a JSON settings file
///
/// ```json
/// {
///   "guessLimit": 6,
///   "wordFile": "words.txt",
///   "categories": { "animals": ["Cat", "Dog"] }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub guess_limit: Option<usize>,
    pub word_file: Option<PathBuf>,
    pub categories: Option<BTreeMap<String, Vec<String>>>,
}

/// Error type for settings loading
#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Json(serde_json::Error),
    InvalidGuessLimit,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Could not read settings: {e}"),
            Self::Json(e) => write!(f, "Invalid settings file: {e}"),
            Self::InvalidGuessLimit => write!(f, "guessLimit must be greater than zero"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::InvalidGuessLimit => None,
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or sets a
    /// guess limit of zero.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse settings from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or sets a guess limit of zero.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        if settings.guess_limit == Some(0) {
            return Err(SettingsError::InvalidGuessLimit);
        }
        Ok(settings)
    }
}

/// Fully resolved configuration for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_wrong_guesses: usize,
    pub category: Option<String>,
    pub word_source: WordSource,
}

/// Where the word store comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Embedded,
    File(PathBuf),
    Inline(BTreeMap<String, Vec<String>>),
}

impl WordSource {
    /// Load the word store this source points at
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a word file cannot be read.
    pub fn load(&self) -> io::Result<WordStore> {
        match self {
            Self::Embedded => Ok(loader::default_store()),
            Self::File(path) => loader::load_from_file(path),
            Self::Inline(map) => Ok(loader::from_category_map(map)),
        }
    }
}

/// Command-line overrides, all optional
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub words: Option<PathBuf>,
    pub difficulty: Option<Difficulty>,
    pub max_wrong: Option<usize>,
    pub category: Option<String>,
}

impl GameConfig {
    /// Resolve flags over settings over defaults
    ///
    /// A word file given on the command line beats everything; otherwise the
    /// settings file's word file, then its inline categories, then the embedded list.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidGuessLimit` if `--max-wrong 0` was given.
    pub fn resolve(settings: Settings, overrides: Overrides) -> Result<Self, SettingsError> {
        let max_wrong_guesses = match (overrides.max_wrong, overrides.difficulty) {
            (Some(0), _) => return Err(SettingsError::InvalidGuessLimit),
            (Some(limit), _) => limit,
            (None, Some(difficulty)) => difficulty.max_wrong_guesses(),
            (None, None) => settings
                .guess_limit
                .unwrap_or_else(|| Difficulty::default().max_wrong_guesses()),
        };

        let word_source = match (overrides.words, settings.word_file, settings.categories) {
            (Some(path), _, _) | (None, Some(path), _) => WordSource::File(path),
            (None, None, Some(map)) => WordSource::Inline(map),
            (None, None, None) => WordSource::Embedded,
        };

        Ok(Self {
            max_wrong_guesses,
            category: overrides.category,
            word_source,
        })
    }
}
