//! Whole-word keyword matching.

/// Returns whether `sentence` contains `word` as a whole word, ignoring case.
///
/// `sentence` is split on whitespace. A full word match is required:
/// `"abc def"` contains `"ABC"` but not `"ab"`.
///
/// `word` is trimmed first; a blank `word` or one that still contains
/// whitespace never matches.
pub fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim();
    if word.is_empty() || word.contains(char::is_whitespace) {
        return false;
    }

    let needle = word.to_lowercase();
    sentence
        .split_whitespace()
        .any(|candidate| candidate.to_lowercase() == needle)
}
