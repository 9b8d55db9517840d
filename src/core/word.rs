//! Game word representation
//!
//! A Word stores its text along with a precomputed letter-count table, so the overlap
//! score between two words is a fixed 26-slot comparison.

use std::fmt;

/// Number of letters in the game alphabet (`a..=z`)
pub const ALPHABET_SIZE: usize = 26;

/// A lowercase word with its letter multiset
///
/// The letter counts are computed once on construction and reused for every score
/// lookup against this word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    counts: [u8; ALPHABET_SIZE],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    TooLong(usize),
    UnknownCharacter { word: String, character: char },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::TooLong(len) => {
                write!(f, "Word must be at most {} letters, got {len}", u8::MAX)
            }
            Self::UnknownCharacter { word, character } => {
                write!(f, "Word '{word}' contains '{character}', which is outside a-z")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - The word is longer than 255 letters (scores are stored as bytes)
    /// - It contains a character outside `a..=z`
    ///
    /// # Examples
    /// ```
    /// use overlap_solver::core::Word;
    ///
    /// let word = Word::new("Little").unwrap();
    /// assert_eq!(word.text(), "little");
    /// assert_eq!(word.count_of(b't'), 2);
    ///
    /// assert!(Word::new("tw33ty").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(character) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::UnknownCharacter { word: text, character });
        }

        if text.len() > usize::from(u8::MAX) {
            return Err(WordError::TooLong(text.len()));
        }

        let mut counts = [0u8; ALPHABET_SIZE];
        for &byte in text.as_bytes() {
            counts[usize::from(byte - b'a')] += 1;
        }

        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected on construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letter-count table indexed by `letter - b'a'`
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &[u8; ALPHABET_SIZE] {
        &self.counts
    }

    /// How many times `letter` occurs; zero for anything outside `a..=z`
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.counts[usize::from(letter - b'a')]
        } else {
            0
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("alliancing").unwrap();
        assert_eq!(word.text(), "alliancing");
        assert_eq!(word.len(), 10);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CONDITIONS").unwrap();
        assert_eq!(word.text(), "conditions");

        let word2 = Word::new("CoNdItIoNs").unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn word_lengths_may_differ() {
        assert_eq!(Word::new("abc").unwrap().len(), 3);
        assert_eq!(Word::new("a").unwrap().len(), 1);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_unknown_character() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::UnknownCharacter { character: '3', .. })
        ));
        assert!(matches!(
            Word::new("two words"),
            Err(WordError::UnknownCharacter { character: ' ', .. })
        ));
        assert!(matches!(
            Word::new("café"),
            Err(WordError::UnknownCharacter { character: 'é', .. })
        ));
    }

    #[test]
    fn word_creation_too_long() {
        let long = "a".repeat(300);
        assert_eq!(Word::new(long), Err(WordError::TooLong(300)));
    }

    #[test]
    fn word_counts_duplicates() {
        let word = Word::new("little").unwrap();
        assert_eq!(word.count_of(b'l'), 2);
        assert_eq!(word.count_of(b't'), 2);
        assert_eq!(word.count_of(b'i'), 1);
        assert_eq!(word.count_of(b'e'), 1);
        assert_eq!(word.count_of(b'z'), 0);
        assert_eq!(word.counts().iter().map(|&c| usize::from(c)).sum::<usize>(), 6);
    }

    #[test]
    fn word_count_of_outside_alphabet() {
        let word = Word::new("tweety").unwrap();
        assert_eq!(word.count_of(b'T'), 0);
        assert_eq!(word.count_of(b'!'), 0);
    }

    #[test]
    fn word_display() {
        let word = Word::new("tweety").unwrap();
        assert_eq!(format!("{word}"), "tweety");
    }
}
