//! Opening word analysis
//!
//! The opener is the word whose full score row splits the whole vocabulary most evenly,
//! i.e. the zero-guess deviation minimizer. It only depends on the vocabulary, so it can be
//! computed once offline and kept as a named setting.

use super::SolverError;
use super::deviation::{group_sizes, std_dev};
use crate::config::OpenerChoice;
use crate::core::{Vocabulary, Word};
use crate::matrix::ScoreMatrix;
use rayon::prelude::*;

/// One vocabulary word scored as an opening guess
#[derive(Debug, Clone)]
pub struct OpenerRank<'a> {
    pub word: &'a Word,
    /// Vocabulary index (row of the full matrix)
    pub index: usize,
    /// Number of distinct score groups the word splits the vocabulary into
    pub groups: usize,
    /// Size of the largest group
    pub largest_group: usize,
    pub deviation: f64,
}

/// Rank every vocabulary word as an opener, best first
///
/// Sorted by deviation ascending; equal deviations keep vocabulary order.
///
/// # Examples
/// ```
/// use overlap_solver::core::Vocabulary;
/// use overlap_solver::matrix::ScoreMatrix;
/// use overlap_solver::solver::rank_openers;
///
/// let vocabulary = Vocabulary::from_words(["aaa", "abc", "abd", "xyz"]).unwrap();
/// let matrix = ScoreMatrix::build(&vocabulary);
///
/// let ranked = rank_openers(&vocabulary, &matrix);
/// assert_eq!(ranked.len(), 4);
/// assert!(ranked[0].deviation <= ranked[3].deviation);
/// ```
#[must_use]
pub fn rank_openers<'a>(vocabulary: &'a Vocabulary, matrix: &ScoreMatrix) -> Vec<OpenerRank<'a>> {
    let mut ranked: Vec<OpenerRank<'a>> = vocabulary
        .words()
        .par_iter()
        .enumerate()
        .map(|(index, word)| {
            let sizes = group_sizes(matrix.row(index).iter().copied());
            OpenerRank {
                word,
                index,
                groups: sizes.len(),
                largest_group: sizes.last().copied().unwrap_or(0),
                deviation: std_dev(&sizes),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.deviation
            .total_cmp(&b.deviation)
            .then(a.index.cmp(&b.index))
    });
    ranked
}

/// The opening word an opener setting stands for
///
/// # Errors
/// Returns `SolverError::UnknownOpener` for a fixed word missing from the vocabulary, or
/// `SolverError::NoCandidates` if there is nothing to rank.
pub fn resolve_opener<'a>(
    vocabulary: &'a Vocabulary,
    matrix: &ScoreMatrix,
    choice: &OpenerChoice,
) -> Result<&'a Word, SolverError> {
    match choice {
        OpenerChoice::Fixed(text) => vocabulary
            .find(text)
            .ok_or_else(|| SolverError::UnknownOpener(text.clone())),
        OpenerChoice::Auto => rank_openers(vocabulary, matrix)
            .first()
            .map(|rank| rank.word)
            .ok_or(SolverError::NoCandidates),
    }
}
