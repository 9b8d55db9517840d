//! All-pairs overlap score matrix
//!
//! Entry (i, j) is the overlap score between vocabulary words i and j. The matrix is built
//! once per vocabulary (or loaded from a persisted artifact) and shared read-only by every
//! game and every worker thread.

pub mod artifact;

pub use artifact::{MatrixError, load_from_file, save_to_file};

use crate::core::{Vocabulary, overlap};
use rayon::prelude::*;

/// Dense square matrix of `u8` scores in vocabulary order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    dimension: usize,
    scores: Vec<u8>,
    fingerprint: u64,
}

impl ScoreMatrix {
    /// Compute every pairwise score for a vocabulary
    ///
    /// Rows are computed in parallel; each score reuses the words' precomputed letter counts.
    ///
    /// # Examples
    /// ```
    /// use overlap_solver::core::Vocabulary;
    /// use overlap_solver::matrix::ScoreMatrix;
    ///
    /// let vocabulary = Vocabulary::from_words(["abc", "abd", "xyz"]).unwrap();
    /// let matrix = ScoreMatrix::build(&vocabulary);
    ///
    /// assert_eq!(matrix.dimension(), 3);
    /// assert_eq!(matrix.get(0, 1), 2);
    /// assert_eq!(matrix.get(2, 2), 3);
    /// ```
    #[must_use]
    pub fn build(vocabulary: &Vocabulary) -> Self {
        let words = vocabulary.words();
        let dimension = words.len();

        let scores: Vec<u8> = words
            .par_iter()
            .flat_map_iter(|a| words.iter().map(move |b| overlap(a, b)))
            .collect();

        Self {
            dimension,
            scores,
            fingerprint: vocabulary.fingerprint(),
        }
    }

    /// Assemble a matrix from raw row-major scores
    ///
    /// # Errors
    /// Returns `MatrixError::Truncated` if `scores` is not exactly `dimension²` long.
    pub fn from_raw(dimension: usize, fingerprint: u64, scores: Vec<u8>) -> Result<Self, MatrixError> {
        let expected = dimension * dimension;
        if scores.len() != expected {
            return Err(MatrixError::Truncated {
                expected,
                actual: scores.len(),
            });
        }

        Ok(Self {
            dimension,
            scores,
            fingerprint,
        })
    }

    /// Number of rows (and columns)
    #[inline]
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Fingerprint of the vocabulary this matrix was computed from
    #[inline]
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Score between words `row` and `col`
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(col < self.dimension, "column {col} out of range");
        self.scores[row * self.dimension + col]
    }

    /// Full row of scores for word `row`
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.dimension;
        &self.scores[start..start + self.dimension]
    }

    /// Raw row-major scores
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.scores
    }

    /// Check that this matrix belongs to `vocabulary`
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the sizes differ, or `FingerprintMismatch` if the
    /// vocabulary content or order changed since the matrix was computed.
    pub fn verify(&self, vocabulary: &Vocabulary) -> Result<(), MatrixError> {
        if self.dimension != vocabulary.len() {
            return Err(MatrixError::DimensionMismatch {
                matrix: self.dimension,
                vocabulary: vocabulary.len(),
            });
        }

        if self.fingerprint != vocabulary.fingerprint() {
            return Err(MatrixError::FingerprintMismatch {
                matrix: self.fingerprint,
                vocabulary: vocabulary.fingerprint(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_words(["little", "tweety", "abc", "abd", "xyz", "banana"]).unwrap()
    }

    #[test]
    fn build_matches_scorer() {
        let vocabulary = vocabulary();
        let matrix = ScoreMatrix::build(&vocabulary);

        for (i, a) in vocabulary.words().iter().enumerate() {
            for (j, b) in vocabulary.words().iter().enumerate() {
                assert_eq!(matrix.get(i, j), overlap(a, b));
            }
        }
    }

    #[test]
    fn build_is_symmetric_with_length_diagonal() {
        let vocabulary = vocabulary();
        let matrix = ScoreMatrix::build(&vocabulary);

        for i in 0..matrix.dimension() {
            assert_eq!(usize::from(matrix.get(i, i)), vocabulary.words()[i].len());
            for j in 0..matrix.dimension() {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[test]
    fn row_slices_line_up() {
        let vocabulary = vocabulary();
        let matrix = ScoreMatrix::build(&vocabulary);

        assert_eq!(matrix.row(0).len(), 6);
        assert_eq!(matrix.row(0)[1], 3); // little vs tweety
        assert_eq!(matrix.as_bytes().len(), 36);
    }

    #[test]
    fn verify_accepts_own_vocabulary() {
        let vocabulary = vocabulary();
        let matrix = ScoreMatrix::build(&vocabulary);
        assert!(matrix.verify(&vocabulary).is_ok());
    }

    #[test]
    fn verify_rejects_resized_vocabulary() {
        let matrix = ScoreMatrix::build(&vocabulary());
        let smaller = Vocabulary::from_words(["abc", "abd"]).unwrap();

        assert!(matches!(
            matrix.verify(&smaller),
            Err(MatrixError::DimensionMismatch {
                matrix: 6,
                vocabulary: 2
            })
        ));
    }

    #[test]
    fn verify_rejects_reordered_vocabulary() {
        let matrix = ScoreMatrix::build(&vocabulary());
        let reordered =
            Vocabulary::from_words(["tweety", "little", "abc", "abd", "xyz", "banana"]).unwrap();

        assert!(matches!(
            matrix.verify(&reordered),
            Err(MatrixError::FingerprintMismatch { .. })
        ));
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(ScoreMatrix::from_raw(2, 0, vec![2, 0, 0, 2]).is_ok());
        assert!(matches!(
            ScoreMatrix::from_raw(2, 0, vec![2, 0, 0]),
            Err(MatrixError::Truncated {
                expected: 4,
                actual: 3
            })
        ));
    }
}
