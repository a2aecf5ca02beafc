//! Word list check command
//!
//! Validates a raw word list the same way a game would, and reports what it
//! found instead of starting a game.

use crate::game::{ConfigError, GameConfig};

/// Result of checking a word list
pub struct CheckReport {
    /// Where the list came from (`builtin` or a path)
    pub source: String,
    pub word_count: usize,
    pub max_rounds: u32,
    /// Shortest and longest words, when the list is not empty
    pub extremes: Option<(String, String)>,
    pub error: Option<ConfigError>,
}

impl CheckReport {
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        self.error.is_none()
    }
}

/// Check whether `words` can back a game of `max_rounds` rounds
#[must_use]
pub fn check_word_list(source: &str, words: &[String], max_rounds: u32) -> CheckReport {
    let shortest = words.iter().min_by_key(|w| w.len());
    let longest = words.iter().max_by_key(|w| w.len());
    let extremes = shortest.zip(longest).map(|(s, l)| (s.clone(), l.clone()));

    // Score increase does not affect validity
    let error = GameConfig::new(words.iter().map(String::as_str), max_rounds, 0).err();

    if let Some(err) = &error {
        tracing::warn!(source, error = %err, "word list rejected");
    }

    CheckReport {
        source: source.to_string(),
        word_count: words.len(),
        max_rounds,
        extremes,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;
    use crate::game::MAX_ROUNDS;
    use crate::wordlists::{WORDS, loader::words_from_slice};

    #[test]
    fn builtin_list_is_playable() {
        let words = words_from_slice(WORDS);
        let report = check_word_list("builtin", &words, MAX_ROUNDS);

        assert!(report.is_playable());
        assert_eq!(report.word_count, WORDS.len());
        assert!(report.extremes.is_some());
    }

    #[test]
    fn reports_extremes() {
        let words = words_from_slice(&["fox", "kotlin", "elephant"]);
        let report = check_word_list("test", &words, 2);

        assert_eq!(
            report.extremes,
            Some(("fox".to_string(), "elephant".to_string()))
        );
        assert!(report.is_playable());
    }

    #[test]
    fn reports_small_pool() {
        let words = words_from_slice(&["kotlin", "android"]);
        let report = check_word_list("test", &words, 5);

        assert_eq!(
            report.error,
            Some(ConfigError::PoolTooSmall {
                words: 2,
                max_rounds: 5
            })
        );
        assert!(!report.is_playable());
    }

    #[test]
    fn reports_unshuffleable_word() {
        let words = words_from_slice(&["kotlin", "mmm"]);
        let report = check_word_list("test", &words, 1);

        assert!(matches!(
            report.error,
            Some(ConfigError::InvalidWord {
                source: WordError::Unshuffleable('m'),
                ..
            })
        ));
    }

    #[test]
    fn empty_list() {
        let report = check_word_list("empty", &[], 1);
        assert_eq!(report.word_count, 0);
        assert!(report.extremes.is_none());
        assert!(!report.is_playable());
    }
}
