//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckReport, check_word_list};
pub use simple::run_simple;
