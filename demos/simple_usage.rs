/*!
simple_usage.rs

Example demonstrating:
- compile-time dictionary embedding using the `include_dictionary!` proc-macro
- runtime construction of a `Dictionary` from an iterator of words
- checking, scoring and a non-interactive suggestion session

Run with:
    cargo run --example simple_usage

Note: the `include_dictionary!` macro expects the path you pass to be relative to the crate root
(evaluated using `CARGO_MANIFEST_DIR`). This example uses `tests/data/words.txt` which is included
in the repository for the tests.
*/

use spellcheckrs::{
    include_dictionary, Correction, Decision, Dictionary, Lexicon, SearchOptions, Searcher,
    SpellChecker, SuggestionSession, Verbosity,
};

fn print_corrections(title: &str, corrections: &[Correction]) {
    println!("-- {} ({} corrections) --", title, corrections.len());
    for c in corrections {
        println!(
            "  token: {:<10} suggestion: {:<10} distance: {:>4.1}",
            c.token, c.suggestion, c.distance
        );
    }
}

fn example_compile_time() {
    let dict = include_dictionary!("tests/data/words.txt");

    println!("=== Compile-time embedded dictionary ({} words) ===", dict.len());

    let searcher = Searcher::new(&dict);
    print_corrections("Top for 'RECIEVE'", &searcher.lookup("RECIEVE", Verbosity::Top));
    print_corrections("Closest for 'HELO'", &searcher.lookup("HELO", Verbosity::Closest));
}

fn example_runtime_build() {
    println!("\n=== Runtime-built dictionary ===");

    let dict = Dictionary::from_iter(["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog"]);
    let checker = SpellChecker::new(&dict);

    let sentence = "Teh quick bron fox jumsp over the lazy dog.";
    println!("sentence:   {}", sentence);
    println!("misspelled: {:?}", checker.misspelled(sentence));
    println!("score:      {}", checker.score(sentence));

    let options = SearchOptions {
        max_distance: Some(2.0),
        ..SearchOptions::default()
    };
    let mut accept = |c: &Correction| {
        println!("  accepting {} -> {}", c.token, c.suggestion);
        Decision::Accept
    };
    let report = SuggestionSession::run(&dict, options, sentence, &mut accept);
    println!("suggestions: {:?}", report.suggestions.as_slice());
}

fn main() {
    println!("spellcheckrs example: compile-time macro and runtime builder\n");

    example_compile_time();
    example_runtime_build();

    println!("\nDone.");
}
