//! The game vocabulary
//!
//! An ordered, duplicate-free list of words loaded once and shared read-only by every game.
//! Word order defines the row/column order of the score matrix.

use super::{Word, WordError};
use rustc_hash::{FxHashMap, FxHasher};
use std::fmt;
use std::hash::Hasher;

/// Immutable vocabulary with word lookup and a content fingerprint
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
    fingerprint: u64,
}

/// Error type for invalid vocabularies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    Empty,
    Duplicate(String),
    Word(WordError),
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Vocabulary must contain at least one word"),
            Self::Duplicate(word) => write!(f, "Vocabulary contains '{word}' more than once"),
            Self::Word(e) => write!(f, "Invalid vocabulary word: {e}"),
        }
    }
}

impl std::error::Error for VocabularyError {}

impl From<WordError> for VocabularyError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl Vocabulary {
    /// Build a vocabulary from words in matrix order
    ///
    /// # Errors
    /// Returns `VocabularyError` if the list is empty, a word is invalid, or a word repeats.
    ///
    /// # Examples
    /// ```
    /// use overlap_solver::core::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::from_words(["abc", "abd", "xyz"]).unwrap();
    /// assert_eq!(vocabulary.len(), 3);
    /// assert_eq!(vocabulary.index_of("abd"), Some(1));
    ///
    /// assert!(Vocabulary::from_words(["abc", "abc"]).is_err());
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(VocabularyError::Empty);
        }

        let mut index = FxHashMap::default();
        let mut hasher = FxHasher::default();
        for (i, word) in words.iter().enumerate() {
            if index.insert(word.text().to_string(), i).is_some() {
                return Err(VocabularyError::Duplicate(word.text().to_string()));
            }
            hasher.write(word.text().as_bytes());
            hasher.write_u8(b',');
        }
        hasher.write_usize(words.len());

        Ok(Self {
            words,
            index,
            fingerprint: hasher.finish(),
        })
    }

    /// Parse a delimited word collection (commas and/or whitespace)
    ///
    /// # Errors
    /// Same as [`Vocabulary::from_words`].
    pub fn parse(text: &str) -> Result<Self, VocabularyError> {
        Self::from_words(
            text.split(|c: char| c == ',' || c.is_whitespace())
                .map(str::trim)
                .filter(|w| !w.is_empty()),
        )
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word at matrix index `i`
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&Word> {
        self.words.get(i)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Matrix index of a word, case-insensitive
    #[must_use]
    pub fn index_of(&self, text: &str) -> Option<usize> {
        self.index
            .get(text)
            .or_else(|| self.index.get(&text.to_lowercase()))
            .copied()
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index_of(text).is_some()
    }

    /// Look up a word, returning the vocabulary's own copy
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.index_of(text).map(|i| &self.words[i])
    }

    /// Hash of the words and their order
    ///
    /// Persisted with the score matrix so a stale artifact is rejected at load time.
    #[inline]
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Length of the longest word, which bounds every score
    #[must_use]
    pub fn max_word_len(&self) -> usize {
        self.words.iter().map(Word::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_preserves_order() {
        let vocabulary = Vocabulary::from_words(["xyz", "abc", "abd"]).unwrap();
        let texts: Vec<&str> = vocabulary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["xyz", "abc", "abd"]);
        assert_eq!(vocabulary.index_of("xyz"), Some(0));
        assert_eq!(vocabulary.index_of("ABD"), Some(2));
        assert_eq!(vocabulary.index_of("nope"), None);
    }

    #[test]
    fn vocabulary_rejects_duplicates() {
        assert_eq!(
            Vocabulary::from_words(["abc", "xyz", "ABC"]).unwrap_err(),
            VocabularyError::Duplicate("abc".to_string())
        );
    }

    #[test]
    fn vocabulary_rejects_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(
            Vocabulary::from_words(empty).unwrap_err(),
            VocabularyError::Empty
        );
        assert_eq!(
            Vocabulary::parse(" , ,\n").unwrap_err(),
            VocabularyError::Empty
        );
    }

    #[test]
    fn vocabulary_rejects_invalid_word() {
        assert!(matches!(
            Vocabulary::from_words(["abc", "a-c"]),
            Err(VocabularyError::Word(WordError::UnknownCharacter { .. }))
        ));
    }

    #[test]
    fn parse_accepts_commas_and_newlines() {
        let vocabulary = Vocabulary::parse("abc,abd,\nxyz\n").unwrap();
        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.contains("xyz"));
    }

    #[test]
    fn fingerprint_tracks_content_and_order() {
        let a = Vocabulary::from_words(["abc", "abd", "xyz"]).unwrap();
        let b = Vocabulary::from_words(["abc", "abd", "xyz"]).unwrap();
        let reordered = Vocabulary::from_words(["abd", "abc", "xyz"]).unwrap();
        let changed = Vocabulary::from_words(["abc", "abd", "xyw"]).unwrap();

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), reordered.fingerprint());
        assert_ne!(a.fingerprint(), changed.fingerprint());
    }

    #[test]
    fn max_word_len() {
        let vocabulary = Vocabulary::from_words(["a", "abcd", "ab"]).unwrap();
        assert_eq!(vocabulary.max_word_len(), 4);
    }
}
