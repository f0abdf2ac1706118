use std::fs;

use spellcheckrs::persist::{save_suggestions, save_words};
use spellcheckrs::{
    Config, Correction, Decision, Dictionary, SearchOptions, SpellChecker, SpellError,
    SuggestionSession, TokenOutcome,
};

fn write_word_list(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("WordsFile.txt");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_check_score_and_save_misspelled() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_word_list(&dir, "the\nquick\n\nbrown\n  fox  \n");
    let dict = Dictionary::from_path(&path).unwrap();
    let checker = SpellChecker::new(&dict);

    assert!(checker.check_word("THE"));
    assert!(checker.check_word("fox"));
    assert!(!checker.check_word("teh"));

    let sentence = "TEH QUICK BRON FOX";
    assert_eq!(checker.misspelled(sentence), vec!["TEH", "BRON"]);
    assert_eq!(checker.score(sentence).ratio(), 0.5);
    assert_eq!(checker.score("").ratio(), 1.0);

    let out = dir.path().join("IncorrectWords.txt");
    let saved = save_words(&out, checker.distinct_misspelled("teh bron teh")).unwrap();
    assert_eq!(saved, 2);
    assert_eq!(fs::read_to_string(&out).unwrap(), "TEH\nBRON\n");
}

#[test]
fn test_suggestion_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_word_list(&dir, "THE\nQUICK\nBROWN\nFOX\n");
    let dict = Dictionary::from_path(&path).unwrap();

    let mut decider = |c: &Correction| {
        if c.token == "TEH" {
            Decision::Accept
        } else {
            Decision::Reject
        }
    };
    let report = SuggestionSession::run(
        &dict,
        SearchOptions::default(),
        "Teh quick bron fox.",
        &mut decider,
    );

    let proposed: Vec<(&str, &str, f64)> = report
        .outcomes
        .iter()
        .filter_map(|o| match o {
            TokenOutcome::Accepted(c) | TokenOutcome::Discarded(c) => {
                Some((c.token.as_str(), c.suggestion.as_str(), c.distance))
            }
            _ => None,
        })
        .collect();
    assert_eq!(proposed, vec![("TEH", "THE", 1.0), ("BRON", "BROWN", 1.0)]);
    assert_eq!(report.suggestions.iter().collect::<Vec<_>>(), vec!["THE"]);

    let out = dir.path().join("SpellingSuggestions.txt");
    assert!(save_suggestions(&out, &report.suggestions).unwrap());
    assert_eq!(fs::read_to_string(&out).unwrap(), "THE\n");
}

#[test]
fn test_nothing_saved_when_all_rejected() {
    let dict = Dictionary::from_iter(["THE", "QUICK", "BROWN", "FOX"]);
    let mut reject = |_: &Correction| Decision::Reject;
    let report = SuggestionSession::run(&dict, SearchOptions::default(), "teh bron", &mut reject);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("SpellingSuggestions.txt");
    assert!(!save_suggestions(&out, &report.suggestions).unwrap());
    assert!(!out.exists());
}

#[test]
fn test_missing_dictionary_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dictionary::from_path(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, SpellError::MissingDictionarySource { .. }));
}

#[test]
fn test_config_file_drives_search() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("spellcheck.json");
    fs::write(
        &config_path,
        r#"{"search": {"max_distance": 1.0, "parallel": true}}"#,
    )
    .unwrap();
    let config = Config::from_json_file(&config_path).unwrap();

    let dict = Dictionary::from_iter(["THE", "QUICK", "BROWN", "FOX"]);
    let mut accept = |_: &Correction| Decision::Accept;
    let report = SuggestionSession::run(&dict, config.search, "teh xyzzyq", &mut accept);

    assert_eq!(report.suggestions.iter().collect::<Vec<_>>(), vec!["THE"]);
    assert_eq!(report.outcomes[1], TokenOutcome::NoMatch("XYZZYQ".to_string()));
}
