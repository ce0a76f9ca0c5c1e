//! Character-level helpers for word tokens.

use crate::dict::ValidationError;

/// Longest accepted word, in chars. Trie walks recurse once per char.
pub const MAX_WORD_CHARS: usize = 256;

/// Reverse a word character by character.
pub fn reverse_word(word: &str) -> String {
    word.chars().rev().collect()
}

/// Length in characters, the unit used for ranking.
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// A word token is non-empty and made only of alphabetic characters.
pub fn is_word_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

/// Trim and lowercase `raw`, rejecting anything that is not a word token.
pub fn normalize_word(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !is_word_token(trimmed) {
        return Err(ValidationError::NonAlphabetic(trimmed.to_string()));
    }
    let len = char_len(trimmed);
    if len > MAX_WORD_CHARS {
        return Err(ValidationError::TooLong(len));
    }
    Ok(trimmed.to_lowercase())
}

/// True when the last character is ASCII punctuation.
pub fn ends_with_punctuation(s: &str) -> bool {
    s.chars().next_back().is_some_and(|c| c.is_ascii_punctuation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_word() {
        assert_eq!(reverse_word("bobcat"), "tacbob");
        assert_eq!(reverse_word(""), "");
        assert_eq!(reverse_word("über"), "rebü");
    }

    #[test]
    fn test_char_len_counts_chars() {
        assert_eq!(char_len("cat"), 3);
        assert_eq!(char_len("café"), 4);
    }

    #[test]
    fn test_is_word_token() {
        assert!(is_word_token("catalog"));
        assert!(is_word_token("Straße"));
        assert!(!is_word_token(""));
        assert!(!is_word_token("can't"));
        assert!(!is_word_token("abc1"));
        assert!(!is_word_token("two words"));
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  Attic\n").unwrap(), "attic");
        assert_eq!(normalize_word("   "), Err(ValidationError::Empty));
        assert_eq!(
            normalize_word("x-ray"),
            Err(ValidationError::NonAlphabetic("x-ray".to_string()))
        );
    }

    #[test]
    fn test_normalize_word_length_cap() {
        let longest = "a".repeat(MAX_WORD_CHARS);
        assert_eq!(normalize_word(&longest).unwrap(), longest);
        let over = "a".repeat(MAX_WORD_CHARS + 1);
        assert_eq!(
            normalize_word(&over),
            Err(ValidationError::TooLong(MAX_WORD_CHARS + 1))
        );
    }

    #[test]
    fn test_ends_with_punctuation() {
        assert!(ends_with_punctuation("hello,"));
        assert!(ends_with_punctuation("what?"));
        assert!(!ends_with_punctuation("hello"));
        assert!(!ends_with_punctuation(""));
    }
}
