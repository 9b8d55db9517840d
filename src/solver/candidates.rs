//! Candidate set with its aligned score submatrix
//!
//! The i-th candidate is always the i-th row and column of the submatrix; every reduction
//! masks the candidate list, rows and columns together.

use super::SolverError;
use super::submatrix::Submatrix;
use crate::core::{Vocabulary, Word};
use crate::matrix::ScoreMatrix;

/// Words still consistent with every observed score
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    vocabulary: &'a Vocabulary,
    words: Vec<&'a Word>,
    scores: Submatrix<'a>,
}

impl<'a> CandidateSet<'a> {
    /// Every vocabulary word, against the full matrix
    #[must_use]
    pub fn full(vocabulary: &'a Vocabulary, matrix: &'a ScoreMatrix) -> Self {
        Self {
            vocabulary,
            words: vocabulary.words().iter().collect(),
            scores: Submatrix::full(matrix),
        }
    }

    /// No candidates (before the first game is prepared)
    #[must_use]
    pub const fn empty(vocabulary: &'a Vocabulary, matrix: &'a ScoreMatrix) -> Self {
        Self {
            vocabulary,
            words: Vec::new(),
            scores: Submatrix::empty(matrix),
        }
    }

    /// Back to the full vocabulary
    pub fn reset(&mut self) {
        *self = Self::full(self.vocabulary, self.scores.matrix());
    }

    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[must_use]
    pub const fn scores(&self) -> &Submatrix<'a> {
        &self.scores
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Current position of a word, if it is still a candidate
    #[must_use]
    pub fn position_of(&self, word: &str) -> Option<usize> {
        let index = self.vocabulary.index_of(word)?;
        (0..self.scores.len()).find(|&i| self.scores.original_index(i) == index)
    }

    /// Drop every candidate inconsistent with `score` for `guess`, and `guess` itself
    ///
    /// # Errors
    /// - `NotACandidate` if `guess` is not a current candidate (nothing is changed)
    /// - `NonSquare` / `Misaligned` if the reduced submatrix no longer lines up
    /// - `Exhausted` if no candidate survives
    pub fn reduce(&mut self, guess: &str, score: u8) -> Result<(), SolverError> {
        let x = self
            .position_of(guess)
            .ok_or_else(|| SolverError::NotACandidate(guess.to_string()))?;

        // Candidates that would have produced the observed score against the guess;
        // the guess itself is out since it did not win
        let mut keep: Vec<bool> = self.scores.row(x).map(|s| s == score).collect();
        keep[x] = false;

        self.scores.retain(&keep)?;
        self.words = self
            .words
            .iter()
            .zip(&keep)
            .filter_map(|(&word, &k)| k.then_some(word))
            .collect();

        if self.words.len() != self.scores.len() {
            return Err(SolverError::Misaligned {
                candidates: self.words.len(),
                rows: self.scores.len(),
            });
        }

        if self.words.is_empty() {
            return Err(SolverError::Exhausted {
                guess: guess.to_string(),
                score,
            });
        }

        Ok(())
    }
}
