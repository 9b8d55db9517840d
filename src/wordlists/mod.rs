//! Word lists for the overlap game
//!
//! Provides the embedded vocabulary compiled into the binary for zero-cost access, and a
//! loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{Vocabulary, VocabularyError};

/// The embedded words as a vocabulary, in score-matrix order
///
/// # Errors
/// Returns `VocabularyError` if the embedded list is malformed (caught by the tests below).
pub fn embedded_vocabulary() -> Result<Vocabulary, VocabularyError> {
    Vocabulary::from_words(WORDS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        // All words should be 10 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), 10, "Word '{word}' is not 10 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_vocabulary_builds() {
        let vocabulary = embedded_vocabulary().unwrap();
        assert_eq!(vocabulary.len(), WORDS_COUNT);
        assert_eq!(vocabulary.max_word_len(), 10);
        assert_eq!(vocabulary.get(0).unwrap().text(), WORDS[0]);
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 546, "Expected 546 words");
    }
}
