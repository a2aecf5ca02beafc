//! Terminal output formatting
//!
//! Display utilities for line mode and command results.

pub mod display;
pub mod formatters;

pub use display::{print_check_report, print_game_summary, print_round};
