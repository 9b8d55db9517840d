//! Word list loading utilities
//!
//! Custom lists use the same format as the embedded one: words separated by commas and/or
//! whitespace. File order becomes score-matrix order.

use crate::core::Vocabulary;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a vocabulary from a file
///
/// Invalid entries are an error, not skipped, so matrix indices never shift.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is empty, or holds an invalid or duplicate
/// word.
///
/// # Examples
/// ```no_run
/// use overlap_solver::wordlists::loader::load_from_file;
///
/// let vocabulary = load_from_file("data/words_10.txt").unwrap();
/// println!("Loaded {} words", vocabulary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    Vocabulary::parse(&content)
        .with_context(|| format!("Invalid word list {}", path.display()))
}
