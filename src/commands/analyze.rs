//! Word analysis command
//!
//! Shows how one word splits the whole vocabulary as an opening guess.

use crate::core::Vocabulary;
use crate::matrix::ScoreMatrix;
use crate::solver::rank_openers;
use anyhow::{Result, anyhow};
use std::collections::BTreeMap;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    /// Score -> number of vocabulary words giving that score (the word itself included)
    pub groups: BTreeMap<u8, usize>,
    pub deviation: f64,
    /// 1-based position among all words ranked as openers
    pub rank: usize,
    pub total_words: usize,
    /// Deviation of the best opener, for comparison
    pub best_word: String,
    pub best_deviation: f64,
}

impl AnalysisResult {
    /// Expected size of the candidate set left after this guess, if the secret is uniform
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        let squares: usize = self.groups.values().map(|&n| n * n).sum();
        squares as f64 / self.total_words as f64
    }

    #[must_use]
    pub fn largest_group(&self) -> usize {
        self.groups.values().copied().max().unwrap_or(0)
    }
}

/// Analyze a word as an opening guess against the full vocabulary
///
/// # Errors
///
/// Returns an error if the word is not in the vocabulary or the matrix does not belong to
/// it.
pub fn analyze_word(
    word: &str,
    vocabulary: &Vocabulary,
    matrix: &ScoreMatrix,
) -> Result<AnalysisResult> {
    matrix.verify(vocabulary)?;

    let index = vocabulary
        .index_of(word)
        .ok_or_else(|| anyhow!("Word '{word}' not in word list"))?;

    let mut groups = BTreeMap::new();
    for &score in matrix.row(index) {
        *groups.entry(score).or_insert(0) += 1;
    }

    let ranked = rank_openers(vocabulary, matrix);
    let position = ranked
        .iter()
        .position(|r| r.index == index)
        .ok_or_else(|| anyhow!("Word '{word}' missing from opener ranking"))?;
    let best = ranked
        .first()
        .ok_or_else(|| anyhow!("Empty opener ranking"))?;

    Ok(AnalysisResult {
        word: vocabulary.words()[index].text().to_string(),
        groups,
        deviation: ranked[position].deviation,
        rank: position + 1,
        total_words: vocabulary.len(),
        best_word: best.word.text().to_string(),
        best_deviation: best.deviation,
    })
}
