/*!
search module

Nearest-neighbour search over a [`Lexicon`] using [`weighted_distance`].

The search is exhaustive: every entry is scored against the token. Results
are ordered by the total order `(distance, entry)`, so when several entries
share the minimal distance the lexicographically smallest one wins. The same
order is used to reduce parallel results, which makes the sequential and the
`rayon` scans return identical answers.

With `length_prefilter` enabled, entries whose length difference to the token
already exceeds the best distance seen so far are skipped without running the
DP. Every insertion or deletion costs `1.0` and nothing else changes length,
so the length difference is a lower bound and the skip never changes the
result.
*/

use std::cmp::Ordering;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dictionary::Lexicon;
use crate::distance::weighted_distance;

/// A dictionary entry proposed for an unknown token.
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    /// The token as it appeared in the input (uppercased).
    pub token: String,
    /// The dictionary entry closest to `token`.
    pub suggestion: String,
    /// `weighted_distance(suggestion, token)`.
    pub distance: f64,
}

impl Correction {
    fn cmp_rank(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.suggestion.cmp(&other.suggestion))
    }
}

/// Controls which corrections are returned by [`Searcher::lookup`].
///
/// - `Top`: the single best entry (smallest distance, then smallest word)
/// - `Closest`: every entry at the minimal distance, in ascending word order
/// - `All`: every entry within `max_distance`, sorted by distance then word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Top,
    Closest,
    All,
}

/// Tuning knobs for the suggestion search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Reject matches farther than this. `None` always returns the closest
    /// entry no matter how far away it is.
    pub max_distance: Option<f64>,
    /// Skip entries whose length difference alone rules them out.
    pub length_prefilter: bool,
    /// Score entries on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_distance: None,
            length_prefilter: true,
            parallel: false,
        }
    }
}

/// Runs suggestion queries against a borrowed lexicon.
pub struct Searcher<'a, L: Lexicon> {
    lexicon: &'a L,
    options: SearchOptions,
}

impl<'a, L: Lexicon> Searcher<'a, L> {
    pub fn new(lexicon: &'a L) -> Self {
        Self::with_options(lexicon, SearchOptions::default())
    }

    pub fn with_options(lexicon: &'a L, options: SearchOptions) -> Self {
        Self { lexicon, options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn lexicon(&self) -> &'a L {
        self.lexicon
    }

    /// Return the closest entry to `token`, or `None` if the lexicon is empty
    /// or nothing lies within `max_distance`.
    pub fn best_match(&self, token: &str) -> Option<Correction> {
        let best = if self.options.parallel {
            self.best_parallel(token)
        } else {
            self.best_sequential(token)
        };
        let best = best.filter(|c| self.within_threshold(c.distance));
        match &best {
            Some(c) => debug!(
                "best match for '{}' is '{}' (distance {})",
                token, c.suggestion, c.distance
            ),
            None => debug!("no match for '{}'", token),
        }
        best
    }

    /// Look up corrections for `token` according to `verbosity`.
    pub fn lookup(&self, token: &str, verbosity: Verbosity) -> Vec<Correction> {
        if verbosity == Verbosity::Top {
            return self.best_match(token).into_iter().collect();
        }

        let mut results: Vec<Correction> = if self.options.parallel {
            (0..self.lexicon.len())
                .into_par_iter()
                .map(|i| self.score(i, token))
                .filter(|c| self.within_threshold(c.distance))
                .collect()
        } else {
            (0..self.lexicon.len())
                .map(|i| self.score(i, token))
                .filter(|c| self.within_threshold(c.distance))
                .collect()
        };
        results.sort_by(Correction::cmp_rank);

        if verbosity == Verbosity::Closest {
            if let Some(min_distance) = results.first().map(|c| c.distance) {
                results.retain(|c| c.distance == min_distance);
            }
        }
        results
    }

    fn score(&self, index: usize, token: &str) -> Correction {
        let entry = self.lexicon.get(index);
        Correction {
            token: token.to_string(),
            suggestion: entry.to_string(),
            distance: weighted_distance(entry, token),
        }
    }

    fn within_threshold(&self, distance: f64) -> bool {
        self.options.max_distance.map_or(true, |max| distance <= max)
    }

    fn best_sequential(&self, token: &str) -> Option<Correction> {
        let token_len = token.chars().count();
        let mut best: Option<(usize, f64)> = None;

        for i in 0..self.lexicon.len() {
            let entry = self.lexicon.get(i);
            if self.options.length_prefilter {
                if let Some((_, best_distance)) = best {
                    let delta = entry.chars().count().abs_diff(token_len) as f64;
                    // entries are ascending, so an equal distance never wins
                    if delta >= best_distance {
                        continue;
                    }
                }
            }
            let distance = weighted_distance(entry, token);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((i, distance)),
            }
        }

        best.map(|(i, distance)| Correction {
            token: token.to_string(),
            suggestion: self.lexicon.get(i).to_string(),
            distance,
        })
    }

    fn best_parallel(&self, token: &str) -> Option<Correction> {
        (0..self.lexicon.len())
            .into_par_iter()
            .map(|i| self.score(i, token))
            .min_by(Correction::cmp_rank)
    }
}

/// Convenience wrapper: closest entry of `lexicon` to `token` with default
/// options.
pub fn best_match<L: Lexicon>(token: &str, lexicon: &L) -> Option<Correction> {
    Searcher::new(lexicon).best_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn sample() -> Dictionary {
        Dictionary::from_iter(["THE", "QUICK", "BROWN", "FOX"])
    }

    #[test]
    fn test_best_match_basic() {
        let dict = sample();
        let c = best_match("TEH", &dict).unwrap();
        assert_eq!(c.suggestion, "THE");
        assert_eq!(c.distance, 1.0);
        assert_eq!(c.token, "TEH");

        let c = best_match("BRON", &dict).unwrap();
        assert_eq!(c.suggestion, "BROWN");
        assert_eq!(c.distance, 1.0);
    }

    #[test]
    fn test_empty_lexicon_has_no_match() {
        let dict = Dictionary::default();
        assert!(best_match("ANY", &dict).is_none());
        assert!(Searcher::new(&dict).lookup("ANY", Verbosity::All).is_empty());
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        // CAT and BAT are both one substitution away from XAT
        let dict = Dictionary::from_iter(["CAT", "BAT", "MAT"]);
        for parallel in [false, true] {
            for length_prefilter in [false, true] {
                let options = SearchOptions {
                    parallel,
                    length_prefilter,
                    ..SearchOptions::default()
                };
                let c = Searcher::with_options(&dict, options).best_match("XAT").unwrap();
                assert_eq!(c.suggestion, "BAT");
            }
        }
    }

    #[test]
    fn test_always_returns_something_without_threshold() {
        let dict = Dictionary::from_iter(["ZYZZYVA"]);
        let c = best_match("A", &dict).unwrap();
        assert_eq!(c.suggestion, "ZYZZYVA");
        assert!(c.distance > 5.0);
    }

    #[test]
    fn test_max_distance_rejects_far_matches() {
        let dict = Dictionary::from_iter(["ZYZZYVA", "THE"]);
        let options = SearchOptions {
            max_distance: Some(1.0),
            ..SearchOptions::default()
        };
        let searcher = Searcher::with_options(&dict, options);
        assert!(searcher.best_match("QQQQ").is_none());
        assert_eq!(searcher.best_match("TEH").unwrap().suggestion, "THE");
    }

    #[test]
    fn test_lookup_closest_and_all() {
        let dict = Dictionary::from_iter(["BET", "BAT", "BIT", "BUT", "BOAT"]);
        let searcher = Searcher::new(&dict);

        // BET is exact; the rest differ by a single substitution or insertion
        let top = searcher.lookup("BET", Verbosity::Top);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].suggestion, "BET");
        assert_eq!(top[0].distance, 0.0);

        let closest = searcher.lookup("BXT", Verbosity::Closest);
        let words: Vec<&str> = closest.iter().map(|c| c.suggestion.as_str()).collect();
        assert_eq!(words, vec!["BAT", "BET", "BIT", "BUT"]);

        let all = searcher.lookup("BIT", Verbosity::All);
        let words: Vec<&str> = all.iter().map(|c| c.suggestion.as_str()).collect();
        assert_eq!(words, vec!["BIT", "BET", "BAT", "BUT", "BOAT"]);
        assert_eq!(all[1].distance, 0.5);
    }

    #[test]
    fn test_parallel_lookup_matches_sequential() {
        let dict = Dictionary::from_iter([
            "RECEIVE", "RECIPE", "DECEIVE", "THEIR", "THERE", "THREE", "OTHER",
        ]);
        let sequential = Searcher::new(&dict);
        let parallel = Searcher::with_options(
            &dict,
            SearchOptions {
                parallel: true,
                ..SearchOptions::default()
            },
        );
        for token in ["RECIEVE", "THIER", "TEHRE", "OHTER"] {
            assert_eq!(sequential.best_match(token), parallel.best_match(token));
            assert_eq!(
                sequential.lookup(token, Verbosity::All),
                parallel.lookup(token, Verbosity::All)
            );
        }
    }
}
