//! Text normalization
//!
//! Policy:
//! - Canonical decomposition (NFD), then drop every combining mark.
//! - Uppercase. Built-in ciphers are keyed in uppercase, so lookups after
//!   normalization always hit the same key regardless of input case.
//! - Collapse whitespace runs to a single space and trim.
//!
//! Keep this logic single-sourced: phrase equality, length constraints and
//! scoring all depend on it.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize raw input into its canonical comparable form.
///
/// `normalize(normalize(x)) == normalize(x)` for every input.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_uppercase)
        // uppercasing can produce precomposed letters again
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    collapse_whitespace(&stripped)
}

/// Collapse whitespace runs to single spaces and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count characters that are letters
pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}

/// Count space-delimited, non-empty tokens
pub fn word_count(text: &str) -> usize {
    text.split(' ').filter(|w| !w.is_empty()).count()
}
