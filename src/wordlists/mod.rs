//! Word lists for the scramble game
//!
//! Provides the embedded word list compiled into the binary and a loader for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::MAX_ROUNDS;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_scrambleable() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' cannot be scrambled");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn enough_words_for_a_game() {
        let words: Vec<Word> = WORDS.iter().filter_map(|w| Word::new(*w).ok()).collect();
        assert!(words.len() > MAX_ROUNDS as usize);
    }
}
