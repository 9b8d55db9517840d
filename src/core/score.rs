//! Letter-overlap score between a guess and a secret word
//!
//! The score is the size of the intersection of the two letter multisets:
//! sum over letters of `min(count in guess, count in secret)`.
//! "little" and "tweety" share two `t` and one `e`, so they score 3.

use super::{Word, WordError};

/// Overlap score between two words
///
/// Symmetric, and `overlap(w, w) == w.len()` for every word.
///
/// # Examples
/// ```
/// use overlap_solver::core::{Word, overlap};
///
/// let guess = Word::new("little").unwrap();
/// let secret = Word::new("tweety").unwrap();
/// assert_eq!(overlap(&guess, &secret), 3);
/// ```
#[must_use]
pub fn overlap(a: &Word, b: &Word) -> u8 {
    a.counts()
        .iter()
        .zip(b.counts())
        .map(|(&x, &y)| x.min(y))
        .sum()
}

/// Overlap score between two raw strings
///
/// # Errors
/// Returns `WordError::UnknownCharacter` (or another validation error) if either input is not
/// a valid word.
pub fn overlap_text(a: &str, b: &str) -> Result<u8, WordError> {
    Ok(overlap(&Word::new(a)?, &Word::new(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn overlap_documented_example() {
        assert_eq!(overlap(&w("little"), &w("tweety")), 3);
    }

    #[test]
    fn overlap_disjoint_is_zero() {
        assert_eq!(overlap(&w("abc"), &w("xyz")), 0);
    }

    #[test]
    fn overlap_partial() {
        assert_eq!(overlap(&w("abc"), &w("abd")), 2);
        assert_eq!(overlap(&w("aab"), &w("abb")), 2);
        assert_eq!(overlap(&w("aaaa"), &w("a")), 1);
    }

    #[test]
    fn overlap_is_symmetric() {
        let words = ["alliancing", "conditions", "little", "tweety", "abc", "zzz", "banana"];
        for a in words {
            for b in words {
                assert_eq!(overlap(&w(a), &w(b)), overlap(&w(b), &w(a)), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn self_overlap_is_length() {
        for text in ["a", "abc", "banana", "alliancing", "mississippi"] {
            let word = w(text);
            assert_eq!(usize::from(overlap(&word, &word)), word.len());
        }
    }

    #[test]
    fn overlap_bounded_by_shorter_word() {
        assert_eq!(overlap(&w("ab"), &w("abcdef")), 2);
        assert!(overlap(&w("banana"), &w("nab")) <= 3);
    }

    #[test]
    fn overlap_text_rejects_unknown_character() {
        assert_eq!(overlap_text("little", "tweety"), Ok(3));
        assert!(matches!(
            overlap_text("little", "twee7y"),
            Err(WordError::UnknownCharacter { character: '7', .. })
        ));
        assert!(overlap_text("", "abc").is_err());
    }
}
