//! Partition-quality metric
//!
//! Guessing word `g` splits the candidates into groups by the score each candidate would
//! return against `g`. The standard deviation of those group sizes measures how uneven the
//! split is: lower means more evenly sized groups, which is the preferred next guess.

use rustc_hash::FxHashMap;

/// Sizes of the score groups in a row, sorted ascending
///
/// Sorting makes the later floating-point sum independent of score order, so two rows with
/// the same group sizes always get bit-identical deviations.
///
/// # Examples
/// ```
/// use overlap_solver::solver::deviation::group_sizes;
///
/// assert_eq!(group_sizes([3, 0, 3, 3, 1]), vec![1, 1, 3]);
/// ```
pub fn group_sizes<I>(scores: I) -> Vec<usize>
where
    I: IntoIterator<Item = u8>,
{
    let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
    for score in scores {
        *counts.entry(score).or_insert(0) += 1;
    }

    let mut sizes: Vec<usize> = counts.into_values().collect();
    sizes.sort_unstable();
    sizes
}

/// Population standard deviation of group sizes
///
/// Returns 0.0 for no groups.
#[must_use]
pub fn std_dev(sizes: &[usize]) -> f64 {
    if sizes.is_empty() {
        return 0.0;
    }

    let groups = sizes.len() as f64;
    let mean = sizes.iter().sum::<usize>() as f64 / groups;
    let variance = sizes
        .iter()
        .map(|&size| {
            let diff = size as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / groups;

    variance.sqrt()
}

/// Deviation of the partition produced by one row of scores
pub fn row_deviation<I>(scores: I) -> f64
where
    I: IntoIterator<Item = u8>,
{
    std_dev(&group_sizes(scores))
}
