//! Unscramble
//!
//! A word scramble game: unscramble the letters of a random word, score points
//! for each correct answer, and finish the game after a fixed number of rounds.
//!
//! # Quick Start
//!
//! ```rust
//! use unscramble::game::{GameConfig, GameManager};
//!
//! let config = GameConfig::builtin().unwrap();
//! let mut game = GameManager::new(config);
//!
//! let state = game.ui_state();
//! println!("Round {}: {}", state.current_word_count, state.current_scrambled_word);
//!
//! game.update_user_guess("kotlin");
//! game.check_user_guess();
//! ```

// Core domain types
pub mod core;

// Game state management
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
