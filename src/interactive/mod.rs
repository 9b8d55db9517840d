//! Interactive TUI mode
//!
//! The player thinks of a word and types the score of each suggested guess.

mod app;
mod rendering;

pub use app::{App, run_tui};
