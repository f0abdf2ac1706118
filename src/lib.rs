//! spellcheckrs - dictionary-backed spell checking with weighted suggestions
//!
//! The crate checks words and sentences against an uppercase word list, scores
//! sentences, and proposes corrections for unknown words using a weighted
//! Damerau-Levenshtein distance that makes common typos (vowel swaps such as
//! `I`/`E`, transpositions such as `TH`/`HT`) cheaper than other edits.
//!
//! Examples
//!
//! - Runtime dictionary (loaded from a word list file or any iterator):
//!
//! ```
//! use spellcheckrs::{Dictionary, SpellChecker, Searcher};
//!
//! let dict = Dictionary::from_iter(["the", "quick", "brown", "fox"]);
//! let checker = SpellChecker::new(&dict);
//! assert_eq!(checker.misspelled("Teh quick bron fox"), vec!["TEH", "BRON"]);
//! assert_eq!(checker.score("Teh quick bron fox").to_string(), "50.00%");
//!
//! let best = Searcher::new(&dict).best_match("TEH").unwrap();
//! assert_eq!(best.suggestion, "THE");
//! ```
//!
//! - Compile-time embedding (the word list is baked into the binary):
//!
//! ```ignore
//! use spellcheckrs::include_dictionary;
//!
//! let embedded = include_dictionary!("path/to/words.txt");
//! let best = spellcheckrs::best_match("HELO", &embedded);
//! ```

pub mod checker;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod persist;
pub mod search;
pub mod session;
pub mod tokenizer;

pub use checker::{SpellChecker, SpellingScore};
pub use config::Config;
pub use dictionary::{Dictionary, EmbeddedDictionary, Lexicon};
pub use distance::weighted_distance;
pub use error::{Result, SpellError};
pub use search::{best_match, Correction, SearchOptions, Searcher, Verbosity};
pub use session::{
    Decide, Decision, SessionReport, SuggestionList, SuggestionSession, TokenOutcome,
};
pub use tokenizer::tokenize;

/// Re-export the compile-time dictionary macro from the proc-macro crate.
///
/// Expansions refer to `::phf`, so callers need `phf` as a dependency too.
pub use spellcheckrs_macros::include_dictionary;
