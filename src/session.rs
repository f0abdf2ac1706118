/*!
session module

Interactive suggestion flow over one sentence.

Each token moves through a small state machine:

```text
Known ──────────────────────────────────────────────► next token
Unknown ─► search ─┬─ no match ─────────────────────► NoMatch
                   └─ Proposed ─► decide ─┬─ Accept ─► Accepted (pushed to list)
                                          └─ Reject ─► Discarded
```

Decisions are requested synchronously, one per unknown token, in token order.
Accepted suggestions are collected into a [`SuggestionList`] that keeps first
insertion order and ignores repeats.
*/

use std::collections::HashSet;

use log::debug;

use crate::dictionary::Lexicon;
use crate::search::{Correction, SearchOptions, Searcher};
use crate::tokenizer::tokenize;

/// The user's answer to a proposed correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    /// `y` or `yes` (any case, surrounding whitespace ignored) accepts;
    /// any other response rejects.
    pub fn from_response(response: &str) -> Self {
        let response = response.trim();
        if response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes") {
            Decision::Accept
        } else {
            Decision::Reject
        }
    }
}

/// Source of accept/reject decisions for proposed corrections.
pub trait Decide {
    fn decide(&mut self, correction: &Correction) -> Decision;
}

impl<F> Decide for F
where
    F: FnMut(&Correction) -> Decision,
{
    fn decide(&mut self, correction: &Correction) -> Decision {
        self(correction)
    }
}

/// What happened to one token of the input.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenOutcome {
    /// Present in the dictionary.
    Known(String),
    /// Unknown, but the search produced nothing to propose.
    NoMatch(String),
    Accepted(Correction),
    Discarded(Correction),
}

/// Insertion-ordered, duplicate-free list of accepted suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionList {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `word` unless already present. Returns true if it was added.
    pub fn push<S: Into<String>>(&mut self, word: S) -> bool {
        let word = word.into();
        if self.seen.contains(&word) {
            return false;
        }
        self.seen.insert(word.clone());
        self.items.push(word);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl<S: Into<String>> Extend<S> for SuggestionList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.push(word);
        }
    }
}

/// Result of running a session over one sentence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionReport {
    /// One entry per token, in input order.
    pub outcomes: Vec<TokenOutcome>,
    pub suggestions: SuggestionList,
}

impl SessionReport {
    /// Tokens that were not found in the dictionary, in order.
    pub fn unknown_tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.outcomes.iter().filter_map(|o| match o {
            TokenOutcome::Known(_) => None,
            TokenOutcome::NoMatch(t) => Some(t.as_str()),
            TokenOutcome::Accepted(c) | TokenOutcome::Discarded(c) => Some(c.token.as_str()),
        })
    }
}

/// Drives tokenization, lookup, search and decisions for a sentence.
pub struct SuggestionSession<'a, L: Lexicon> {
    searcher: Searcher<'a, L>,
    suggestions: SuggestionList,
}

impl<'a, L: Lexicon> SuggestionSession<'a, L> {
    pub fn new(lexicon: &'a L) -> Self {
        Self::with_options(lexicon, SearchOptions::default())
    }

    pub fn with_options(lexicon: &'a L, options: SearchOptions) -> Self {
        Self {
            searcher: Searcher::with_options(lexicon, options),
            suggestions: SuggestionList::new(),
        }
    }

    /// Process every token of `text`, asking `decider` about each unknown one.
    ///
    /// Suggestions accepted in earlier calls stay in the session list, so a
    /// session may span several sentences.
    pub fn process<D: Decide>(&mut self, text: &str, decider: &mut D) -> Vec<TokenOutcome> {
        let lexicon = self.searcher.lexicon();
        let mut outcomes = Vec::new();

        for token in tokenize(text) {
            if lexicon.contains(&token) {
                outcomes.push(TokenOutcome::Known(token));
                continue;
            }
            let Some(correction) = self.searcher.best_match(&token) else {
                outcomes.push(TokenOutcome::NoMatch(token));
                continue;
            };
            match decider.decide(&correction) {
                Decision::Accept => {
                    if !self.suggestions.push(correction.suggestion.clone()) {
                        debug!("'{}' already in suggestion list", correction.suggestion);
                    }
                    outcomes.push(TokenOutcome::Accepted(correction));
                }
                Decision::Reject => outcomes.push(TokenOutcome::Discarded(correction)),
            }
        }
        outcomes
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    /// End the session and hand back the accepted suggestions.
    pub fn finish(self) -> SuggestionList {
        self.suggestions
    }

    /// One-shot helper: run a fresh session over `text`.
    pub fn run<D: Decide>(
        lexicon: &'a L,
        options: SearchOptions,
        text: &str,
        decider: &mut D,
    ) -> SessionReport {
        let mut session = Self::with_options(lexicon, options);
        let outcomes = session.process(text, decider);
        SessionReport {
            outcomes,
            suggestions: session.finish(),
        }
    }
}
