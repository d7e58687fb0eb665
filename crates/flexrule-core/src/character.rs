// Character classification used by the rule synthesizer

/// Check whether a character counts as detachable trailing punctuation.
///
/// This is the ASCII punctuation set: ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Check whether a word contains at least one alphabetic character.
pub fn has_letter(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
}

/// Length of a word in characters (Unicode scalar values, not bytes).
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Split a trailing punctuation character off a word.
///
/// Returns `(stem, Some(punct))` when the last character is punctuation,
/// otherwise `(word, None)`.
pub fn split_trailing_punctuation(word: &str) -> (&str, Option<char>) {
    match word.chars().next_back() {
        Some(last) if is_punctuation(last) => {
            let stem = &word[..word.len() - last.len_utf8()];
            (stem, Some(last))
        }
        _ => (word, None),
    }
}
