//! Error types for spellcheckrs.
//!
//! Only failures that abort a session are errors. Empty input, an empty
//! dictionary or a search that finds nothing are ordinary result values
//! (`false`, `None`, empty vectors), never variants of [`SpellError`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for spellcheckrs operations.
#[derive(Error, Debug)]
pub enum SpellError {
    /// The word-list source could not be opened or read. Fatal at startup.
    #[error("dictionary source '{}' is missing or unreadable: {source}", path.display())]
    MissingDictionarySource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O errors while writing word lists.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed JSON configuration file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal prompt failures in the interactive front end.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl SpellError {
    /// Create a configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpellError::Config(msg.into())
    }

    pub fn missing_dictionary<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SpellError::MissingDictionarySource {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for operations that may fail with [`SpellError`].
pub type Result<T> = std::result::Result<T, SpellError>;
