//! Word and sentence correctness checks against a [`Lexicon`].

use std::collections::HashSet;
use std::fmt;

use crate::dictionary::Lexicon;
use crate::tokenizer::{normalize, tokenize};

/// Fraction of a sentence's tokens found in the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellingScore {
    pub correct: usize,
    pub total: usize,
}

impl SpellingScore {
    /// `correct / total`, or `1.0` for a sentence without tokens.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }
}

impl fmt::Display for SpellingScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.percent())
    }
}

/// Membership checks over single words and tokenized sentences.
pub struct SpellChecker<'a, L: Lexicon> {
    lexicon: &'a L,
}

impl<'a, L: Lexicon> SpellChecker<'a, L> {
    pub fn new(lexicon: &'a L) -> Self {
        Self { lexicon }
    }

    /// Returns true if the trimmed, uppercased `word` is in the dictionary.
    pub fn check_word(&self, word: &str) -> bool {
        let word = normalize(word);
        !word.is_empty() && self.lexicon.contains(&word)
    }

    /// Unknown tokens of `sentence`, in order, repeats included.
    pub fn misspelled(&self, sentence: &str) -> Vec<String> {
        tokenize(sentence)
            .into_iter()
            .filter(|t| !self.lexicon.contains(t))
            .collect()
    }

    /// Unknown tokens of `sentence`, each reported once at its first position.
    pub fn distinct_misspelled(&self, sentence: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.misspelled(sentence)
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect()
    }

    pub fn score(&self, sentence: &str) -> SpellingScore {
        let tokens = tokenize(sentence);
        let correct = tokens.iter().filter(|t| self.lexicon.contains(t)).count();
        SpellingScore {
            correct,
            total: tokens.len(),
        }
    }
}
