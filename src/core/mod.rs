//! Core domain types for the overlap game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod score;
mod vocabulary;
mod word;

pub use score::{overlap, overlap_text};
pub use vocabulary::{Vocabulary, VocabularyError};
pub use word::{ALPHABET_SIZE, Word, WordError};
