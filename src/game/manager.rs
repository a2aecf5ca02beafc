//! Game state manager
//!
//! Owns the answer, the used-word set and the in-progress guess, and publishes
//! an immutable [`GameUiState`] snapshot after every state change.

use super::config::GameConfig;
use super::selection::pick_unused;
use super::state::{GamePhase, GameUiState};
use crate::core::scramble;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use tokio::sync::watch;

/// Single game session
///
/// All operations take `&mut self` and complete synchronously. Observers get
/// snapshots through [`GameManager::subscribe`] and never touch the mutable
/// state directly.
///
/// # Examples
/// ```
/// use unscramble::game::{GameConfig, GameManager};
///
/// let config = GameConfig::new(["kotlin", "android"], 2, 20).unwrap();
/// let mut game = GameManager::with_seed(config, 1);
///
/// game.update_user_guess("not it");
/// game.check_user_guess();
///
/// let state = game.ui_state();
/// assert!(state.is_guessed_word_wrong);
/// assert_eq!(state.current_word_count, 1);
/// assert_eq!(game.user_guess(), "");
/// ```
pub struct GameManager {
    config: GameConfig,
    rng: StdRng,
    state_tx: watch::Sender<GameUiState>,
    /// Index into `config.words()` of the active answer
    current_word: usize,
    used_words: FxHashSet<usize>,
    user_guess: String,
}

impl GameManager {
    /// Start a game with an OS-seeded random source
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Start a game with a fixed seed, for reproducible word order
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let (state_tx, _) = watch::channel(GameUiState::default());
        let mut manager = Self {
            config,
            rng,
            state_tx,
            current_word: 0,
            used_words: FxHashSet::default(),
            user_guess: String::new(),
        };
        manager.reset_game();
        manager
    }

    /// Subscribe to state snapshots
    ///
    /// The receiver starts at the current snapshot and is marked changed on
    /// every publication.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<GameUiState> {
        self.state_tx.subscribe()
    }

    /// Copy of the current snapshot
    #[must_use]
    pub fn ui_state(&self) -> GameUiState {
        self.state_tx.borrow().clone()
    }

    #[must_use]
    pub fn user_guess(&self) -> &str {
        &self.user_guess
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start over: clear used words, pick a word, publish a fresh state
    pub fn reset_game(&mut self) {
        self.used_words.clear();
        self.user_guess.clear();

        let state = match self.pick_random_word_and_shuffle() {
            Some(scrambled) => GameUiState::new_game(scrambled),
            // Unreachable with a validated config: the pool has >= 1 word
            None => GameUiState {
                is_game_over: true,
                ..GameUiState::default()
            },
        };

        tracing::info!(
            max_rounds = self.config.max_rounds(),
            words = self.config.words().len(),
            "new game"
        );
        self.publish(state);
    }

    /// Mirror the text field contents
    pub fn update_user_guess(&mut self, guess: impl Into<String>) {
        self.user_guess = guess.into();
    }

    /// Submit the current guess
    ///
    /// A case-insensitive match scores and advances the round; anything else
    /// flags the guess as wrong. The guess is cleared either way.
    pub fn check_user_guess(&mut self) {
        let state = self.ui_state();
        if state.phase() == GamePhase::GameOver {
            tracing::debug!("guess ignored, game is over");
            self.user_guess.clear();
            return;
        }

        let answer = &self.config.words()[self.current_word];
        if answer.matches_guess(&self.user_guess) {
            let updated_score = state.score.saturating_add(self.config.score_increase());
            tracing::debug!(
                round = state.current_word_count,
                score = updated_score,
                "correct guess"
            );
            self.update_game_state(updated_score);
        } else {
            tracing::debug!(
                round = state.current_word_count,
                guess = %self.user_guess,
                "wrong guess"
            );
            self.publish(GameUiState {
                is_guessed_word_wrong: true,
                ..state
            });
        }

        self.user_guess.clear();
    }

    /// Move to the next word without scoring
    pub fn skip_word(&mut self) {
        let state = self.ui_state();
        if state.phase() == GamePhase::Playing {
            tracing::debug!(round = state.current_word_count, "word skipped");
            self.update_game_state(state.score);
        }

        self.user_guess.clear();
    }

    /// Advance to the next round, or end the game when the quota is used up
    fn update_game_state(&mut self, updated_score: u32) {
        let state = self.ui_state();

        if self.used_words.len() >= self.config.max_rounds() as usize {
            tracing::info!(
                score = updated_score,
                rounds = state.current_word_count,
                "game over"
            );
            self.publish(GameUiState {
                is_guessed_word_wrong: false,
                score: updated_score,
                is_game_over: true,
                ..state
            });
            return;
        }

        let next = match self.pick_random_word_and_shuffle() {
            Some(scrambled) => GameUiState {
                is_guessed_word_wrong: false,
                current_scrambled_word: scrambled,
                current_word_count: state.current_word_count + 1,
                score: updated_score,
                is_game_over: false,
            },
            // Pool smaller than the round quota; config validation rules this out
            None => GameUiState {
                is_guessed_word_wrong: false,
                score: updated_score,
                is_game_over: true,
                ..state
            },
        };
        self.publish(next);
    }

    /// Pick an unused word, record it, and return its scrambled letters
    fn pick_random_word_and_shuffle(&mut self) -> Option<String> {
        let index = pick_unused(self.config.words(), &self.used_words, &mut self.rng)?;
        self.used_words.insert(index);
        self.current_word = index;

        let word = &self.config.words()[index];
        let scrambled = scramble(word, &mut self.rng);
        tracing::debug!(used = self.used_words.len(), scrambled = %scrambled, "picked word");
        Some(scrambled)
    }

    fn publish(&self, state: GameUiState) {
        self.state_tx.send_replace(state);
    }
}
