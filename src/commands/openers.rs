//! Opening word ranking command
//!
//! Ranks every vocabulary word by how evenly it splits the whole vocabulary. The top word is
//! the value to keep as the default opener.

use crate::core::Vocabulary;
use crate::matrix::ScoreMatrix;
use crate::solver::rank_openers;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// One row of the ranking
pub struct OpenerEntry {
    pub rank: usize,
    pub word: String,
    pub deviation: f64,
    pub groups: usize,
    pub largest_group: usize,
}

/// Result of ranking openers
pub struct OpenersResult {
    pub entries: Vec<OpenerEntry>,
    pub total_words: usize,
    pub duration: Duration,
}

/// Rank all openers and keep the best `top`
///
/// Shows a spinner while ranking when `show_progress` is set.
///
/// # Errors
///
/// Returns an error if the matrix does not belong to the vocabulary.
pub fn rank_top_openers(
    vocabulary: &Vocabulary,
    matrix: &ScoreMatrix,
    top: usize,
    show_progress: bool,
) -> Result<OpenersResult> {
    matrix.verify(vocabulary)?;

    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Ranking {} opening words...", vocabulary.len()));
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let entries = rank_openers(vocabulary, matrix)
        .into_iter()
        .take(top)
        .enumerate()
        .map(|(i, r)| OpenerEntry {
            rank: i + 1,
            word: r.word.text().to_string(),
            deviation: r.deviation,
            groups: r.groups,
            largest_group: r.largest_group,
        })
        .collect();
    let duration = start.elapsed();
    spinner.finish_and_clear();

    Ok(OpenersResult {
        entries,
        total_words: vocabulary.len(),
        duration,
    })
}
