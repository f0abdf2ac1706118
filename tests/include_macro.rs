use spellcheckrs::{
    include_dictionary, Dictionary, Lexicon, SearchOptions, Searcher, SpellChecker, Verbosity,
};

#[test]
fn test_include_macro_normalizes_words() {
    // Build the dictionary at compile time from tests/data/words.txt
    let dict = include_dictionary!("tests/data/words.txt");

    // blank lines dropped, "the" and "THE" collapse, padding trimmed
    assert_eq!(dict.len(), 14);
    assert!(dict.contains("THE"));
    assert!(dict.contains("JUMPS"));
    assert!(!dict.contains("the"));

    let words: Vec<&str> = dict.iter().collect();
    let mut sorted = words.clone();
    sorted.sort_unstable();
    assert_eq!(words, sorted);
}

#[test]
fn test_include_macro_matches_runtime_dictionary() {
    let embedded = include_dictionary!("tests/data/words.txt", uppercase = true);
    let runtime = Dictionary::from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/words.txt"))
        .unwrap();

    assert_eq!(embedded.to_dictionary(), runtime);

    for token in ["TEH", "HELO", "RECIEVE", "THIER", "WROLD"] {
        assert_eq!(
            Searcher::new(&embedded).lookup(token, Verbosity::All),
            Searcher::new(&runtime).lookup(token, Verbosity::All),
        );
    }
}

#[test]
fn test_include_macro_suggestions() {
    let dict = include_dictionary!("tests/data/words.txt", max_words = 100);

    let checker = SpellChecker::new(&dict);
    assert!(checker.check_word("lazy"));
    assert_eq!(checker.misspelled("the quikc brown fox"), vec!["QUIKC"]);

    let searcher = Searcher::with_options(&dict, SearchOptions::default());
    assert_eq!(searcher.best_match("RECIEVE").unwrap().suggestion, "RECEIVE");
    assert_eq!(searcher.best_match("RECIEVE").unwrap().distance, 0.5);

    // HELO is one insertion away from both HELLO and HELP
    let closest = searcher.lookup("HELO", Verbosity::Closest);
    let terms: Vec<&str> = closest.iter().map(|c| c.suggestion.as_str()).collect();
    assert_eq!(terms, vec!["HELLO", "HELP"]);
}
