//! Game session logic
//!
//! Configuration, the published state snapshot, word selection and the
//! manager that ties them together.

pub mod config;
mod manager;
pub mod selection;
mod state;

pub use config::{ConfigError, GameConfig, MAX_ROUNDS, SCORE_INCREASE};
pub use manager::GameManager;
pub use state::{GamePhase, GameUiState};
