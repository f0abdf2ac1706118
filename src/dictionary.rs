/*!
dictionary module

Read-only word sets the checker and the suggestion search run against.

Two backings are provided:

- [`Dictionary`]: built at runtime from a newline-delimited word list (file,
  reader or iterator). Entries are trimmed, uppercased and deduplicated, then
  kept in a sorted `Vec` so membership is a binary search.
- [`EmbeddedDictionary`]: built at compile time by the `include_dictionary!`
  proc-macro, which emits a `phf::Set` for membership and a sorted static slice
  for iteration.

Both implement [`Lexicon`], which exposes entries in ascending lexicographic
order. That order is the tie-break order of the suggestion search.
*/

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::{Result, SpellError};
use crate::tokenizer::normalize;

/// An immutable set of uppercase words with a fixed iteration order.
///
/// `get(0)..get(len() - 1)` must be strictly ascending.
pub trait Lexicon: Sync {
    /// Returns true if `word` is present. `word` is compared as given, callers
    /// normalize it first.
    fn contains(&self, word: &str) -> bool;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Entry at `index` in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn get(&self, index: usize) -> &str;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runtime dictionary loaded from a word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a `Dictionary` from an iterator of raw words.
    ///
    /// Each word is trimmed and uppercased; blank words are skipped and
    /// duplicates collapse into one entry.
    pub fn from_iter<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = iter
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Read a newline-delimited word list from `reader`.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        Ok(Self::from_iter(lines))
    }

    /// Load a newline-delimited word list from `path`.
    ///
    /// Any failure to open or read the file is reported as
    /// [`SpellError::MissingDictionarySource`]; no partial dictionary is
    /// returned.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SpellError::missing_dictionary(path, e))?;
        let dict = Self::from_reader(BufReader::new(file))
            .map_err(|e| SpellError::missing_dictionary(path, e))?;
        info!("Loaded {} words from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Iterate entries in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl Lexicon for Dictionary {
    fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn get(&self, index: usize) -> &str {
        &self.words[index]
    }
}

/// EmbeddedDictionary: word list compiled into the binary.
///
/// Produced by the `include_dictionary!` proc-macro, which emits:
/// - a `::phf::Set<&'static str>` holding every word, for O(1) membership
/// - a `&'static [&'static str]` holding the same words in ascending order
pub struct EmbeddedDictionary {
    set: &'static ::phf::Set<&'static str>,
    sorted: &'static [&'static str],
}

impl EmbeddedDictionary {
    /// Construct from the statics generated by `include_dictionary!`.
    ///
    /// `sorted` must hold exactly the members of `set` in ascending order.
    pub fn from_phf(
        set: &'static ::phf::Set<&'static str>,
        sorted: &'static [&'static str],
    ) -> Self {
        debug_assert_eq!(set.len(), sorted.len());
        Self { set, sorted }
    }

    /// Iterate entries in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        let sorted: &'static [&'static str] = self.sorted;
        sorted.iter().copied()
    }

    /// Copy the embedded words into a runtime [`Dictionary`].
    pub fn to_dictionary(&self) -> Dictionary {
        Dictionary {
            words: self.sorted.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Lexicon for EmbeddedDictionary {
    fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    fn len(&self) -> usize {
        self.sorted.len()
    }

    fn get(&self, index: usize) -> &str {
        self.sorted[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_iter_normalizes() {
        let dict = Dictionary::from_iter(["fox", " The ", "", "THE", "quick\t"]);
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("THE"));
        assert!(dict.contains("QUICK"));
        assert!(!dict.contains("the"));
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["FOX", "QUICK", "THE"]);
    }

    #[test]
    fn test_from_reader_skips_blank_lines() {
        let source = "brown\n\n  \nfox\r\nbrown\n";
        let dict = Dictionary::from_reader(Cursor::new(source)).unwrap();
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["BROWN", "FOX"]);
    }

    #[test]
    fn test_missing_file() {
        let err = Dictionary::from_path("/definitely/not/here/WordsFile.txt").unwrap_err();
        assert!(matches!(err, SpellError::MissingDictionarySource { .. }));
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert!(!dict.contains(""));
    }
}
