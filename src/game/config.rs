//! Game configuration
//!
//! A `GameConfig` is validated once, up front. Every hazard that could stall
//! word selection or scrambling is rejected here, so a running game never
//! has to handle it.

use crate::core::{Word, WordError};
use crate::wordlists::{WORDS, loader::words_from_slice};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Rounds per game
pub const MAX_ROUNDS: u32 = 10;

/// Points awarded for a correct guess
pub const SCORE_INCREASE: u32 = 20;

/// Reasons a word list or round setting cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one round")]
    ZeroRounds,
    #[error("word list has {words} words but a game needs {max_rounds}")]
    PoolTooSmall { words: usize, max_rounds: u32 },
    #[error("invalid word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },
    #[error("word '{0}' appears more than once")]
    DuplicateWord(String),
}

/// Validated game settings
#[derive(Debug, Clone)]
pub struct GameConfig {
    words: Vec<Word>,
    max_rounds: u32,
    score_increase: u32,
}

impl GameConfig {
    /// Build a configuration from a raw word list
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `max_rounds` is zero
    /// - Any word fails `Word` validation (too short, not letters, unshuffleable)
    /// - A word appears twice (case-insensitively)
    /// - There are fewer words than rounds
    ///
    /// # Examples
    /// ```
    /// use unscramble::game::GameConfig;
    ///
    /// let config = GameConfig::new(["kotlin", "android"], 2, 20).unwrap();
    /// assert_eq!(config.words().len(), 2);
    ///
    /// assert!(GameConfig::new(["kotlin"], 2, 20).is_err());
    /// ```
    pub fn new<I, S>(words: I, max_rounds: u32, score_increase: u32) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }

        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut validated = Vec::new();

        for raw in words {
            let raw: String = raw.into();
            let word = Word::new(raw.as_str()).map_err(|source| ConfigError::InvalidWord {
                word: raw.clone(),
                source,
            })?;

            if !seen.insert(word.text().to_string()) {
                return Err(ConfigError::DuplicateWord(word.text().to_string()));
            }
            validated.push(word);
        }

        // One unused word must exist for every round, including the last
        if validated.len() < max_rounds as usize {
            return Err(ConfigError::PoolTooSmall {
                words: validated.len(),
                max_rounds,
            });
        }

        tracing::debug!(
            words = validated.len(),
            max_rounds,
            score_increase,
            "game config validated"
        );

        Ok(Self {
            words: validated,
            max_rounds,
            score_increase,
        })
    }

    /// Embedded word list with the default round count and score increment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the embedded list is invalid. The test suite
    /// checks that it is not.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(words_from_slice(WORDS), MAX_ROUNDS, SCORE_INCREASE)
    }

    /// Same words and scoring, different round count
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `max_rounds` is zero or exceeds the word count.
    pub fn with_max_rounds(self, max_rounds: u32) -> Result<Self, ConfigError> {
        let score_increase = self.score_increase;
        Self::new(
            self.words.into_iter().map(|w| w.text().to_string()),
            max_rounds,
            score_increase,
        )
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[inline]
    #[must_use]
    pub const fn score_increase(&self) -> u32 {
        self.score_increase
    }

    /// Highest reachable score, capped at `u32::MAX`
    #[inline]
    #[must_use]
    pub const fn best_score(&self) -> u32 {
        self.max_rounds.saturating_mul(self.score_increase)
    }
}
