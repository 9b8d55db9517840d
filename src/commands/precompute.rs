//! Score matrix precomputation command
//!
//! Builds the all-pairs score matrix for a word list and writes it as an artifact that
//! `--matrix` can load later.

use crate::core::Vocabulary;
use crate::matrix::{self, ScoreMatrix};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Result of writing a matrix artifact
pub struct PrecomputeResult {
    pub path: PathBuf,
    pub dimension: usize,
    pub fingerprint: u64,
    pub bytes: usize,
    pub duration: Duration,
}

/// Build the matrix for `vocabulary` and save it to `path`
///
/// The written file is read back and checked before returning.
///
/// # Errors
///
/// Returns an error if the file cannot be written or does not read back identically.
pub fn precompute_matrix<P: AsRef<Path>>(
    vocabulary: &Vocabulary,
    path: P,
    show_progress: bool,
) -> Result<PrecomputeResult> {
    let path = path.as_ref();

    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    spinner.set_message(format!("Scoring {} word pairs...", vocabulary.len().pow(2)));
    let matrix = ScoreMatrix::build(vocabulary);

    spinner.set_message(format!("Writing {}...", path.display()));
    matrix::save_to_file(&matrix, path)
        .with_context(|| format!("Failed to write score matrix to {}", path.display()))?;

    let reloaded = matrix::load_from_file(path, vocabulary)
        .with_context(|| format!("Failed to read back {}", path.display()))?;
    anyhow::ensure!(reloaded == matrix, "Score matrix in {} does not read back", path.display());

    let duration = start.elapsed();
    spinner.finish_and_clear();

    Ok(PrecomputeResult {
        path: path.to_path_buf(),
        dimension: matrix.dimension(),
        fingerprint: matrix.fingerprint(),
        bytes: matrix.as_bytes().len() + matrix::artifact::HEADER_LEN,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn precompute_writes_loadable_artifact() {
        let vocabulary = Vocabulary::from_words(["abc", "abd", "xyz", "little"]).unwrap();
        let path = std::env::temp_dir().join(format!(
            "overlap_solver_{}_precompute.ovlm",
            std::process::id()
        ));

        let result = precompute_matrix(&vocabulary, &path, false).unwrap();
        let loaded = matrix::load_from_file(&path, &vocabulary).unwrap();
        let size = fs::metadata(&path).unwrap().len();
        fs::remove_file(&path).unwrap();

        assert_eq!(result.dimension, 4);
        assert_eq!(result.fingerprint, vocabulary.fingerprint());
        assert_eq!(result.bytes as u64, size);
        assert_eq!(loaded, ScoreMatrix::build(&vocabulary));
    }

    #[test]
    fn precompute_to_missing_directory_fails() {
        let vocabulary = Vocabulary::from_words(["abc", "abd"]).unwrap();
        let result = precompute_matrix(&vocabulary, "/definitely/not/here/m.ovlm", false);
        assert!(result.is_err());
    }
}
