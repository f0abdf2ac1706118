//! Runtime configuration.
//!
//! A [`Config`] can be read from a JSON file; every field is optional and
//! falls back to [`Config::default`]. The command line applies its overrides
//! on top of whatever was loaded.
//!
//! ```json
//! {
//!   "dictionary": "words.txt",
//!   "search": { "max_distance": 2.0, "parallel": true }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};
use crate::persist::{DEFAULT_DICTIONARY_FILE, DEFAULT_MISSPELLED_FILE, DEFAULT_SUGGESTIONS_FILE};
use crate::search::SearchOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Newline-delimited word list loaded at startup.
    pub dictionary: PathBuf,
    /// Where `save-misspelled` writes unknown words.
    pub misspelled_output: PathBuf,
    /// Where accepted suggestions are written at the end of a session.
    pub suggestions_output: PathBuf,
    pub search: SearchOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY_FILE),
            misspelled_output: PathBuf::from(DEFAULT_MISSPELLED_FILE),
            suggestions_output: PathBuf::from(DEFAULT_SUGGESTIONS_FILE),
            search: SearchOptions::default(),
        }
    }
}

impl Config {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.search.max_distance {
            if !max.is_finite() || max < 0.0 {
                return Err(SpellError::config(format!(
                    "search.max_distance must be a non-negative number, got {max}"
                )));
            }
        }
        Ok(())
    }
}
