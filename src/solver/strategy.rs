//! Gamer interface
//!
//! Defines the Gamer trait driven by the game loop, and a random baseline.

use super::SolverError;
use super::candidates::CandidateSet;
use super::partition::PartitionSolver;
use crate::config::{GamerKind, OpenerChoice};
use crate::core::{Vocabulary, Word};
use crate::matrix::ScoreMatrix;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A guessing strategy for one game at a time
///
/// The game loop calls `prepare_for_new_game` once, then alternates `guess_word` and
/// `result_of_guess` until the guess matches or the payout runs out.
pub trait Gamer<'a> {
    /// Display name used in reports
    fn name(&self) -> &'static str;

    /// Words still consistent with every observed score
    fn candidate_count(&self) -> usize;

    /// Reset all per-game state
    fn prepare_for_new_game(&mut self);

    /// Next word to guess
    ///
    /// # Errors
    /// Returns `SolverError` if the gamer is not prepared or has no candidates left.
    fn guess_word(&mut self) -> Result<&'a Word, SolverError>;

    /// Record the score observed for a wrong guess
    ///
    /// # Errors
    /// Returns `SolverError` if `guess` was not a candidate or the score rules out every
    /// remaining word.
    fn result_of_guess(&mut self, guess: &str, score: u8) -> Result<(), SolverError>;
}

/// Which gamer to play with
pub enum GamerType<'a, R: Rng> {
    /// Lowest-deviation partition solver (default)
    Partition(PartitionSolver<'a>),
    /// Uniform choice among consistent candidates
    Random(RandomGamer<'a, R>),
}

impl<'a, R: Rng> GamerType<'a, R> {
    /// Create the gamer selected by `kind`
    ///
    /// The opener only applies to the partition solver; `rng` only to the random gamer.
    ///
    /// # Errors
    /// Returns `SolverError` if the matrix does not belong to the vocabulary or the opener
    /// is unknown.
    pub fn new(
        kind: GamerKind,
        vocabulary: &'a Vocabulary,
        matrix: &'a ScoreMatrix,
        opener: &OpenerChoice,
        rng: R,
    ) -> Result<Self, SolverError> {
        Ok(match kind {
            GamerKind::Partition => {
                Self::Partition(PartitionSolver::from_choice(vocabulary, matrix, opener)?)
            }
            GamerKind::Random => Self::Random(RandomGamer::new(vocabulary, matrix, rng)?),
        })
    }
}

impl<'a, R: Rng> Gamer<'a> for GamerType<'a, R> {
    fn name(&self) -> &'static str {
        match self {
            Self::Partition(g) => g.name(),
            Self::Random(g) => g.name(),
        }
    }

    fn candidate_count(&self) -> usize {
        match self {
            Self::Partition(g) => g.candidate_count(),
            Self::Random(g) => g.candidate_count(),
        }
    }

    fn prepare_for_new_game(&mut self) {
        match self {
            Self::Partition(g) => g.prepare_for_new_game(),
            Self::Random(g) => g.prepare_for_new_game(),
        }
    }

    fn guess_word(&mut self) -> Result<&'a Word, SolverError> {
        match self {
            Self::Partition(g) => g.guess_word(),
            Self::Random(g) => g.guess_word(),
        }
    }

    fn result_of_guess(&mut self, guess: &str, score: u8) -> Result<(), SolverError> {
        match self {
            Self::Partition(g) => g.result_of_guess(guess, score),
            Self::Random(g) => g.result_of_guess(guess, score),
        }
    }
}

/// Random gamer
///
/// Guesses uniformly among the words still consistent with every observed score. Useful as
/// a baseline for the partition solver.
pub struct RandomGamer<'a, R: Rng> {
    candidates: CandidateSet<'a>,
    prepared: bool,
    rng: R,
}

impl<'a, R: Rng> RandomGamer<'a, R> {
    /// Create a random gamer drawing from `rng`
    ///
    /// # Errors
    /// Returns `SolverError::Artifact` if the matrix was not built for this vocabulary.
    pub fn new(
        vocabulary: &'a Vocabulary,
        matrix: &'a ScoreMatrix,
        rng: R,
    ) -> Result<Self, SolverError> {
        matrix.verify(vocabulary)?;
        Ok(Self {
            candidates: CandidateSet::empty(vocabulary, matrix),
            prepared: false,
            rng,
        })
    }
}

impl<'a, R: Rng> Gamer<'a> for RandomGamer<'a, R> {
    fn name(&self) -> &'static str {
        "Random consistent Gamer"
    }

    fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    fn prepare_for_new_game(&mut self) {
        self.candidates.reset();
        self.prepared = true;
    }

    fn guess_word(&mut self) -> Result<&'a Word, SolverError> {
        if !self.prepared {
            return Err(SolverError::NotPrepared);
        }

        self.candidates
            .words()
            .choose(&mut self.rng)
            .copied()
            .ok_or(SolverError::NoCandidates)
    }

    fn result_of_guess(&mut self, guess: &str, score: u8) -> Result<(), SolverError> {
        if !self.prepared {
            return Err(SolverError::NotPrepared);
        }
        self.candidates.reduce(guess, score)
    }
}
