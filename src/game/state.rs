//! Published game state
//!
//! `GameUiState` is the immutable snapshot observers receive. Each state
//! change publishes a whole new value.

/// Coarse game phase derived from a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Snapshot of everything a game screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameUiState {
    /// Shuffled letters of the current answer
    pub current_scrambled_word: String,
    /// 1-based round index
    pub current_word_count: u32,
    pub score: u32,
    /// Set by a wrong guess, cleared when the round advances
    pub is_guessed_word_wrong: bool,
    pub is_game_over: bool,
}

impl GameUiState {
    /// Fresh first-round state showing `scrambled`
    #[must_use]
    pub const fn new_game(scrambled: String) -> Self {
        Self {
            current_scrambled_word: scrambled,
            current_word_count: 1,
            score: 0,
            is_guessed_word_wrong: false,
            is_game_over: false,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        if self.is_game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }
}

impl Default for GameUiState {
    fn default() -> Self {
        Self::new_game(String::new())
    }
}
