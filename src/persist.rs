//! Newline-delimited word list output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::session::SuggestionList;

/// Default word-list source.
pub const DEFAULT_DICTIONARY_FILE: &str = "WordsFile.txt";
/// Default destination for misspelled words.
pub const DEFAULT_MISSPELLED_FILE: &str = "IncorrectWords.txt";
/// Default destination for accepted suggestions.
pub const DEFAULT_SUGGESTIONS_FILE: &str = "SpellingSuggestions.txt";

/// Write `words` to `writer`, one per line.
pub fn write_words<W, I, S>(writer: W, words: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = BufWriter::new(writer);
    for word in words {
        writeln!(out, "{}", word.as_ref())?;
    }
    out.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `words` into it, one per line.
///
/// The file is written even when `words` is empty.
pub fn save_words<P, I, S>(path: P, words: I) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let words: Vec<S> = words.into_iter().collect();
    write_words(File::create(path)?, &words)?;
    info!("Saved {} words to {}", words.len(), path.display());
    Ok(words.len())
}

/// Save `list` to `path` if it holds anything. Returns true if a file was written.
pub fn save_suggestions<P: AsRef<Path>>(path: P, list: &SuggestionList) -> Result<bool> {
    if list.is_empty() {
        return Ok(false);
    }
    save_words(path, list.iter())?;
    Ok(true)
}
