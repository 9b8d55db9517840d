//! Best-partition gamer
//!
//! Keeps the candidates still consistent with every observed score, plus the matching
//! score submatrix. The next guess is the candidate whose score row splits the remaining
//! candidates into the most evenly sized groups (lowest standard deviation of group sizes).
//! A wrong guess is always removed, so every round strictly shrinks the candidate set.

use super::SolverError;
use super::candidates::CandidateSet;
use super::deviation::row_deviation;
use super::opener::resolve_opener;
use super::strategy::Gamer;
use super::submatrix::Submatrix;
use crate::config::OpenerChoice;
use crate::core::{Vocabulary, Word};
use crate::matrix::ScoreMatrix;
use rayon::prelude::*;

/// Where a solver is in its per-game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// Never prepared
    Uninitialized,
    /// Prepared, no guess reported yet; the next guess is the opener
    Ready,
    /// At least one guess reported and candidates remain
    Guessing,
    /// An observed score eliminated every candidate
    Exhausted,
}

/// Greedy one-ply partition solver
///
/// The vocabulary and full score matrix are borrowed read-only, so any number of solvers
/// (one per worker thread) can share them.
#[derive(Debug, Clone)]
pub struct PartitionSolver<'a> {
    opener: &'a Word,
    prepared: bool,
    guesses: usize,
    candidates: CandidateSet<'a>,
    deviations: Vec<f64>,
}

impl<'a> PartitionSolver<'a> {
    /// Create a solver with a fixed opening word
    ///
    /// # Errors
    /// Returns `SolverError::Artifact` if the matrix was not built for this vocabulary, or
    /// `SolverError::UnknownOpener` if `opener` is not a vocabulary word.
    ///
    /// # Examples
    /// ```
    /// use overlap_solver::core::Vocabulary;
    /// use overlap_solver::matrix::ScoreMatrix;
    /// use overlap_solver::solver::{Gamer, PartitionSolver};
    ///
    /// let vocabulary = Vocabulary::from_words(["abc", "abd", "xyz"]).unwrap();
    /// let matrix = ScoreMatrix::build(&vocabulary);
    /// let mut solver = PartitionSolver::new(&vocabulary, &matrix, "xyz").unwrap();
    ///
    /// solver.prepare_for_new_game();
    /// assert_eq!(solver.guess_word().unwrap().text(), "xyz");
    ///
    /// solver.result_of_guess("xyz", 0).unwrap();
    /// assert_eq!(solver.candidate_count(), 2);
    /// ```
    pub fn new(
        vocabulary: &'a Vocabulary,
        matrix: &'a ScoreMatrix,
        opener: &str,
    ) -> Result<Self, SolverError> {
        matrix.verify(vocabulary)?;

        let opener = vocabulary
            .find(opener)
            .ok_or_else(|| SolverError::UnknownOpener(opener.to_string()))?;

        Ok(Self {
            opener,
            prepared: false,
            guesses: 0,
            candidates: CandidateSet::empty(vocabulary, matrix),
            deviations: Vec::new(),
        })
    }

    /// Create a solver whose opener is the zero-guess deviation minimizer of the vocabulary
    ///
    /// # Errors
    /// Returns `SolverError::Artifact` if the matrix was not built for this vocabulary.
    pub fn with_computed_opener(
        vocabulary: &'a Vocabulary,
        matrix: &'a ScoreMatrix,
    ) -> Result<Self, SolverError> {
        Self::from_choice(vocabulary, matrix, &OpenerChoice::Auto)
    }

    /// Create a solver from an opener setting
    ///
    /// # Errors
    /// See [`PartitionSolver::new`].
    pub fn from_choice(
        vocabulary: &'a Vocabulary,
        matrix: &'a ScoreMatrix,
        choice: &OpenerChoice,
    ) -> Result<Self, SolverError> {
        matrix.verify(vocabulary)?;
        let opener = resolve_opener(vocabulary, matrix, choice)?;
        Self::new(vocabulary, matrix, opener.text())
    }

    /// The fixed first guess
    #[must_use]
    pub const fn opener(&self) -> &'a Word {
        self.opener
    }

    /// Lifecycle state
    #[must_use]
    pub fn state(&self) -> SolverState {
        if !self.prepared {
            SolverState::Uninitialized
        } else if self.guesses == 0 {
            SolverState::Ready
        } else if self.candidates.is_empty() {
            SolverState::Exhausted
        } else {
            SolverState::Guessing
        }
    }

    /// Number of guesses reported this game
    #[must_use]
    pub const fn guesses_made(&self) -> usize {
        self.guesses
    }

    /// Remaining candidates, in current order
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        self.candidates.words()
    }

    /// Current reduced score submatrix, aligned with [`PartitionSolver::candidates`]
    #[must_use]
    pub const fn scores(&self) -> &Submatrix<'a> {
        self.candidates.scores()
    }

    /// Per-candidate deviations, aligned with [`PartitionSolver::candidates`]
    ///
    /// Empty until the first guess has been reported.
    #[must_use]
    pub fn deviations(&self) -> &[f64] {
        &self.deviations
    }

    /// Deviation of a candidate word, if it is still a candidate and deviations are known
    #[must_use]
    pub fn deviation_of(&self, word: &str) -> Option<f64> {
        let position = self.candidates.position_of(word)?;
        self.deviations.get(position).copied()
    }

    /// Position of the lowest deviation; the earliest wins ties
    fn best_position(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &deviation) in self.deviations.iter().enumerate() {
            match best {
                Some((_, lowest)) if deviation.total_cmp(&lowest).is_ge() => {}
                _ => best = Some((i, deviation)),
            }
        }
        best.map(|(i, _)| i)
    }

    fn recompute_deviations(&mut self) {
        let scores = self.candidates.scores();
        self.deviations = (0..scores.len())
            .into_par_iter()
            .map(|i| row_deviation(scores.row(i)))
            .collect();
    }
}

impl<'a> Gamer<'a> for PartitionSolver<'a> {
    fn name(&self) -> &'static str {
        "Best partition Gamer"
    }

    fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    fn prepare_for_new_game(&mut self) {
        self.candidates.reset();
        self.deviations.clear();
        self.guesses = 0;
        self.prepared = true;
    }

    fn guess_word(&mut self) -> Result<&'a Word, SolverError> {
        if !self.prepared {
            return Err(SolverError::NotPrepared);
        }

        if self.guesses == 0 {
            return Ok(self.opener);
        }

        self.best_position()
            .map(|i| self.candidates.words()[i])
            .ok_or(SolverError::NoCandidates)
    }

    fn result_of_guess(&mut self, guess: &str, score: u8) -> Result<(), SolverError> {
        if !self.prepared {
            return Err(SolverError::NotPrepared);
        }
        self.guesses += 1;

        let reduced = self.candidates.reduce(guess, score);
        self.recompute_deviations();
        reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::overlap;
    use crate::solver::opener::rank_openers;

    fn setup(words: &[&str]) -> (Vocabulary, ScoreMatrix) {
        let vocabulary = Vocabulary::from_words(words.iter().copied()).unwrap();
        let matrix = ScoreMatrix::build(&vocabulary);
        (vocabulary, matrix)
    }

    fn texts(solver: &PartitionSolver) -> Vec<String> {
        solver
            .candidates()
            .iter()
            .map(|w| w.text().to_string())
            .collect()
    }

    fn assert_aligned(solver: &PartitionSolver) {
        let scores = solver.scores();
        let candidates = solver.candidates();
        assert_eq!(scores.shape(), (candidates.len(), candidates.len()));
        assert_eq!(solver.deviations().len(), candidates.len());
        for (i, a) in candidates.iter().enumerate() {
            for (j, b) in candidates.iter().enumerate() {
                assert_eq!(scores.get(i, j), overlap(a, b));
            }
        }
    }

    #[test]
    fn new_rejects_unknown_opener() {
        let (vocabulary, matrix) = setup(&["abc", "abd", "xyz"]);
        assert!(matches!(
            PartitionSolver::new(&vocabulary, &matrix, "qqq"),
            Err(SolverError::UnknownOpener(_))
        ));
    }

    #[test]
    fn new_rejects_foreign_matrix() {
        let (vocabulary, _) = setup(&["abc", "abd", "xyz"]);
        let (_, other) = setup(&["abc", "abd"]);
        assert!(matches!(
            PartitionSolver::new(&vocabulary, &other, "abc"),
            Err(SolverError::Artifact(_))
        ));
    }

    #[test]
    fn guess_before_prepare_is_rejected() {
        let (vocabulary, matrix) = setup(&["abc", "abd", "xyz"]);
        let mut solver = PartitionSolver::new(&vocabulary, &matrix, "abc").unwrap();

        assert_eq!(solver.state(), SolverState::Uninitialized);
        assert!(matches!(solver.guess_word(), Err(SolverError::NotPrepared)));
        assert!(matches!(
            solver.result_of_guess("abc", 1),
            Err(SolverError::NotPrepared)
        ));
    }

    #[test]
    fn first_guess_is_the_opener() {
        let (vocabulary, matrix) = setup(&["abc", "abd", "xyz"]);
        let mut solver = PartitionSolver::new(&vocabulary, &matrix, "abd").unwrap();

        for _ in 0..3 {
            solver.prepare_for_new_game();
            assert_eq!(solver.state(), SolverState::Ready);
            assert_eq!(solver.guess_word().unwrap().text(), "abd");
        }
    }

    #[test]
    fn prepare_resets_previous_game() {
        let (vocabulary, matrix) = setup(&["abc", "abd", "xyz", "bcd"]);
        let mut solver = PartitionSolver::new(&vocabulary, &matrix, "xyz").unwrap();

        solver.prepare_for_new_game();
        solver.result_of_guess("xyz", 0).unwrap();
        assert_eq!(solver.candidate_count(), 3);

        solver.prepare_for_new_game();
        assert_eq!(solver.candidate_count(), 4);
        assert_eq!(solver.guesses_made(), 0);
        assert!(solver.deviations().is_empty());
        assert_eq!(solver.guess_word().unwrap().text(), "xyz");
        assert_aligned_full(&solver, &matrix);
    }

    fn assert_aligned_full(solver: &PartitionSolver, matrix: &ScoreMatrix) {
        assert_eq!(solver.scores().shape(), (matrix.dimension(), matrix.dimension()));
    }

    #[test]
    fn result_keeps_only_consistent_candidates() {
        let (vocabulary, matrix) = setup(&["abc", "abd", "xyz", "bcd", "abz"]);
        let mut solver = PartitionSolver::new(&vocabulary, &matrix, "abc").unwrap();
        solver.prepare_for_new_game();

        // Against "abc": abd 2, xyz 0, bcd 2, abz 2
        solver.result_of_guess("abc", 2).unwrap();

        assert_eq!(texts(&solver), ["abd", "bcd", "abz"]);
        assert_eq!(solver.state(), SolverState::Guessing);
        assert_aligned(&solver);
    }

    #[test]
    fn guessed_word_always_removed() {
        // Every word, "a" included, scores 1 against "a"
        let (vocabulary, matrix) = setup(&["a", "ab", "ac", "ad"]);
        let mut solver = PartitionSolver::new(&vocabulary, &matrix, "a").unwrap();
        solver.prepare_for_new_game();

        solver.result_of_guess("a", 1).unwrap();

        assert_eq!(texts(&solver), ["ab", "ac", "ad"]);
        assert!(!solver.candidates().iter().any(|w| w.text() == "a"));
    }

    #[test]
    fn candidates_strictly_shrink() {
        let (vocabulary, matrix) = setup(&["abc", "abd", "xyz", "bcd", "abz", "xya"]);
        let secret = vocabulary.find("bcd").unwrap().clone();
        let mut solver = PartitionSolver::new(&vocabulary, &matrix, "abc").unwrap();
        solver.prepare_for_new_game();

        loop {
            let guess = solver.guess_word().unwrap();
            if guess == &secret {
                break;
            }
            let before = solver.candidate_count();
            solver
                .result_of_guess(guess.text(), overlap(guess, &secret))
                .unwrap();
            assert!(solver.candidate_count() < before);
            assert!(solver.candidates().iter().any(|w| *w == &secret));
            assert_aligned(&solver);
        }
    }

    #[test]
    fn result_for_non_candidate_is_rejected() {
        let (vocabulary, matrix) = setup(&["abc", "abd", "xyz", "bcd"]);
        let mut solver = PartitionSolver::new(&vocabulary, &matrix, "xyz").unwrap();
        solver.prepare_for_new_game();
        solver.result_of_guess("xyz", 0).unwrap();

        // Already eliminated
        assert!(matches!(
            solver.result_of_guess("xyz", 0),
            Err(SolverError::NotACandidate(w)) if w == "xyz"
        ));
        // Never in the vocabulary
        assert!(matches!(
            solver.result_of_guess("qqq", 0),
            Err(SolverError::NotACandidate(_))
        ));
    }

    #[test]
    fn inconsistent_score_is_fatal() {
        let (vocabulary, matrix) = setup(&["abc", "abd", "xyz"]);
        let mut solver = PartitionSolver::new(&vocabulary, &matrix, "abc").unwrap();
        solver.prepare_for_new_game();

        // No word scores 3 against "abc" other than "abc" itself
        let result = solver.result_of_guess("abc", 3);

        assert!(matches!(
            result,
            Err(SolverError::Exhausted { ref guess, score: 3 }) if guess == "abc"
        ));
        assert_eq!(solver.state(), SolverState::Exhausted);
        assert!(matches!(solver.guess_word(), Err(SolverError::NoCandidates)));
    }

    #[test]
    fn guess_is_lowest_deviation_candidate() {
        let (vocabulary, matrix) = setup(&["qqq", "aab", "abc", "abd", "bcd", "cde"]);
        let mut solver = PartitionSolver::new(&vocabulary, &matrix, "qqq").unwrap();
        solver.prepare_for_new_game();
        solver.result_of_guess("qqq", 0).unwrap();

        let deviations = solver.deviations().to_vec();
        let lowest = deviations.iter().copied().fold(f64::INFINITY, f64::min);
        let guess = solver.guess_word().unwrap();
        let position = texts(&solver)
            .iter()
            .position(|w| w == guess.text())
            .unwrap();

        assert!((deviations[position] - lowest).abs() < f64::EPSILON);
        assert_eq!(
            deviations.iter().position(|&d| d.total_cmp(&lowest).is_eq()),
            Some(position)
        );
    }

    #[test]
    fn ties_go_to_earliest_candidate() {
        // After "xyz" scores 0, rows ab/ba/cd each split {2, 1}: identical deviations
        let (vocabulary, matrix) = setup(&["xyz", "ab", "ba", "cd"]);

        for _ in 0..5 {
            let mut solver = PartitionSolver::new(&vocabulary, &matrix, "xyz").unwrap();
            solver.prepare_for_new_game();
            solver.result_of_guess("xyz", 0).unwrap();

            let deviations = solver.deviations();
            assert_eq!(deviations[0].to_bits(), deviations[1].to_bits());
            assert_eq!(deviations[0].to_bits(), deviations[2].to_bits());
            assert_eq!(solver.guess_word().unwrap().text(), "ab");
        }
    }

    #[test]
    fn end_to_end_three_words() {
        let (vocabulary, matrix) = setup(&["abc", "abd", "xyz"]);
        let secret = vocabulary.find("abd").unwrap().clone();
        let mut solver = PartitionSolver::new(&vocabulary, &matrix, "abc").unwrap();
        solver.prepare_for_new_game();

        let mut payout = secret.len();
        let opener = solver.guess_word().unwrap();
        assert_eq!(opener.text(), "abc");
        payout -= 1;
        solver
            .result_of_guess(opener.text(), overlap(opener, &secret))
            .unwrap();

        // Score 2 rules out "xyz" (score 0) and the guess itself
        assert_eq!(texts(&solver), ["abd"]);
        assert_eq!(solver.guess_word().unwrap(), &secret);
        assert!(payout > 0);
    }

    #[test]
    fn deviation_of_candidate() {
        let (vocabulary, matrix) = setup(&["xyz", "ab", "ba", "cd"]);
        let mut solver = PartitionSolver::new(&vocabulary, &matrix, "xyz").unwrap();
        solver.prepare_for_new_game();
        assert_eq!(solver.deviation_of("ab"), None);

        solver.result_of_guess("xyz", 0).unwrap();
        assert!((solver.deviation_of("ab").unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(solver.deviation_of("xyz"), None);
    }

    #[test]
    fn computed_opener_minimizes_full_deviation() {
        let (vocabulary, matrix) = setup(&["aaa", "abc", "abd", "xyz", "bcd"]);
        let solver = PartitionSolver::with_computed_opener(&vocabulary, &matrix).unwrap();
        let ranked = rank_openers(&vocabulary, &matrix);
        assert_eq!(solver.opener().text(), ranked[0].word.text());
    }

    #[test]
    fn from_choice_fixed_and_auto() {
        let (vocabulary, matrix) = setup(&["abc", "abd", "xyz"]);

        let fixed = PartitionSolver::from_choice(
            &vocabulary,
            &matrix,
            &OpenerChoice::Fixed("xyz".to_string()),
        )
        .unwrap();
        assert_eq!(fixed.opener().text(), "xyz");

        assert!(PartitionSolver::from_choice(&vocabulary, &matrix, &OpenerChoice::Auto).is_ok());
    }
}
