//! Scramble word representation
//!
//! A `Word` is a lowercase ASCII word that is guaranteed to have at least one
//! permutation different from itself, so it can always be scrambled.

use std::fmt;
use thiserror::Error;

/// A validated, scrambleable word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must have at least 2 letters, got {0}")]
    TooShort(usize),
    #[error("word must contain only ASCII letters")]
    NonAlphabetic,
    #[error("word cannot be scrambled: all letters are '{0}'")]
    Unshuffleable(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - It has fewer than 2 letters
    /// - It contains anything but ASCII letters
    /// - All of its letters are the same (no distinct permutation exists)
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Word;
    ///
    /// let word = Word::new("Kotlin").unwrap();
    /// assert_eq!(word.text(), "kotlin");
    ///
    /// assert!(Word::new("a").is_err());
    /// assert!(Word::new("zzz").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::NonAlphabetic);
        }

        // ASCII only from here, so byte length == letter count
        if text.len() < 2 {
            return Err(WordError::TooShort(text.len()));
        }

        let first = text.as_bytes()[0];
        if text.bytes().all(|b| b == first) {
            return Err(WordError::Unshuffleable(char::from(first)));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a valid word has at least two letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check a guess against this word, ignoring case
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Word;
    ///
    /// let word = Word::new("android").unwrap();
    /// assert!(word.matches_guess("ANDROID"));
    /// assert!(!word.matches_guess(""));
    /// ```
    #[must_use]
    pub fn matches_guess(&self, guess: &str) -> bool {
        guess.eq_ignore_ascii_case(&self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("kotlin").unwrap();
        assert_eq!(word.text(), "kotlin");
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("ANDROID").unwrap();
        assert_eq!(word.text(), "android");

        let word2 = Word::new("AnDrOiD").unwrap();
        assert_eq!(word2.text(), "android");
    }

    #[test]
    fn word_creation_too_short() {
        assert_eq!(Word::new(""), Err(WordError::TooShort(0)));
        assert_eq!(Word::new("a"), Err(WordError::TooShort(1)));
        assert!(Word::new("ab").is_ok());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::NonAlphabetic)); // Number
        assert_eq!(Word::new("ice cream"), Err(WordError::NonAlphabetic)); // Space
        assert_eq!(Word::new("café"), Err(WordError::NonAlphabetic)); // Non-ASCII
    }

    #[test]
    fn word_creation_all_same_letter() {
        assert_eq!(Word::new("aa"), Err(WordError::Unshuffleable('a')));
        assert_eq!(Word::new("ZZZZ"), Err(WordError::Unshuffleable('z')));
        assert!(Word::new("aab").is_ok());
    }

    #[test]
    fn matches_guess_ignores_case() {
        let word = Word::new("kotlin").unwrap();
        assert!(word.matches_guess("kotlin"));
        assert!(word.matches_guess("KOTLIN"));
        assert!(word.matches_guess("KoTlIn"));
        assert!(!word.matches_guess("kotli"));
        assert!(!word.matches_guess("kotlin "));
        assert!(!word.matches_guess(""));
    }

    #[test]
    fn word_display() {
        let word = Word::new("puzzle").unwrap();
        assert_eq!(format!("{word}"), "puzzle");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("river").unwrap();
        let word2 = Word::new("RIVER").unwrap();
        let word3 = Word::new("rover").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
