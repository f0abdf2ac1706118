//! Splits free text into uppercase word tokens.

/// Characters that separate tokens.
pub const DELIMITERS: [char; 8] = [' ', '.', ',', '!', '?', ';', ':', '\t'];

/// Split `text` on [`DELIMITERS`], drop empty fragments and uppercase the rest.
///
/// Tokens keep their left-to-right order. Empty or delimiter-only input
/// yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(DELIMITERS)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Normalize a single word the way dictionary entries are stored.
pub fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}
