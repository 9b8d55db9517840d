//! Solver contract violations

use crate::matrix::MatrixError;
use std::fmt;

/// Errors raised by a gamer
///
/// Every variant is fatal for the current game: it means the caller broke the solver's
/// contract or the score matrix does not belong to the vocabulary.
#[derive(Debug)]
pub enum SolverError {
    /// A guess or update was requested before `prepare_for_new_game`
    NotPrepared,
    /// The reported guess is not in the current candidate set
    NotACandidate(String),
    /// Reducing the score submatrix left different row and column counts
    NonSquare { rows: usize, cols: usize },
    /// Candidate list and submatrix no longer line up
    Misaligned { candidates: usize, rows: usize },
    /// A guess was requested with no candidates left
    NoCandidates,
    /// An observed score eliminated every remaining candidate
    Exhausted { guess: String, score: u8 },
    /// The configured opening word is not in the vocabulary
    UnknownOpener(String),
    /// The score matrix does not belong to the vocabulary
    Artifact(MatrixError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPrepared => write!(f, "Solver used before prepare_for_new_game"),
            Self::NotACandidate(word) => {
                write!(f, "Guessed word '{word}' is not a remaining candidate")
            }
            Self::NonSquare { rows, cols } => {
                write!(f, "Score submatrix is not square: {rows} rows, {cols} columns")
            }
            Self::Misaligned { candidates, rows } => write!(
                f,
                "Candidate list ({candidates}) does not match submatrix rows ({rows})"
            ),
            Self::NoCandidates => write!(f, "No candidates remain to guess from"),
            Self::Exhausted { guess, score } => write!(
                f,
                "Score {score} for '{guess}' is inconsistent with every remaining candidate"
            ),
            Self::UnknownOpener(word) => {
                write!(f, "Opening word '{word}' is not in the vocabulary")
            }
            Self::Artifact(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Artifact(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MatrixError> for SolverError {
    fn from(e: MatrixError) -> Self {
        Self::Artifact(e)
    }
}
