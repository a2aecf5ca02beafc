//! Core domain types for the scramble game
//!
//! Validated words and the letter scrambling algorithm. Nothing here knows
//! about rounds or scores.

mod scramble;
mod word;

pub use scramble::{MAX_SHUFFLE_ATTEMPTS, scramble};
pub use word::{Word, WordError};
