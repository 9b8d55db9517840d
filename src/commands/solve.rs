//! Word solving command
//!
//! Plays one game against a chosen secret and returns the solution path.

use crate::config::OpenerChoice;
use crate::core::{Vocabulary, overlap};
use crate::matrix::ScoreMatrix;
use crate::solver::{Gamer, PartitionSolver};
use anyhow::{Result, anyhow};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub opener: OpenerChoice,
    /// Keep guessing after the payout runs out
    pub exhaustive: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, opener: OpenerChoice) -> Self {
        Self {
            target,
            opener,
            exhaustive: false,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
    /// Payout left at the end (0 if the payout ran out)
    pub payout: usize,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub score: u8,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Deviation of the guess among the candidates it was picked from; `None` for the opener
    pub deviation: Option<f64>,
    /// Remaining candidates after this step, when few enough to list
    pub remaining: Vec<String>,
}

/// How many remaining candidates a step lists
const LIST_LIMIT: usize = 10;

/// Solve a specific word with the partition solver
///
/// # Errors
///
/// Returns an error if:
/// - The target word is not in the vocabulary
/// - The matrix does not belong to the vocabulary, or the opener is unknown
/// - The solver hits a contract violation
pub fn solve_word(
    config: SolveConfig,
    vocabulary: &Vocabulary,
    matrix: &ScoreMatrix,
) -> Result<SolveResult> {
    let target = vocabulary
        .find(&config.target)
        .ok_or_else(|| anyhow!("Word '{}' not in word list", config.target))?;

    let mut solver = PartitionSolver::from_choice(vocabulary, matrix, &config.opener)?;
    solver.prepare_for_new_game();

    let mut payout = target.len();
    let mut guesses: Vec<GuessStep> = Vec::new();
    let mut success = false;

    while payout > 0 || config.exhaustive {
        let candidates_before = solver.candidate_count();
        let guess = solver.guess_word()?;
        let deviation = solver.deviation_of(guess.text());
        let score = overlap(guess, target);

        if guess == target {
            guesses.push(GuessStep {
                word: guess.text().to_string(),
                score,
                candidates_before,
                candidates_after: 1,
                deviation,
                remaining: vec![guess.text().to_string()],
            });
            success = true;
            break;
        }

        payout = payout.saturating_sub(1);
        solver.result_of_guess(guess.text(), score)?;

        let candidates_after = solver.candidate_count();
        let remaining = if candidates_after <= LIST_LIMIT {
            solver
                .candidates()
                .iter()
                .map(|w| w.text().to_string())
                .collect()
        } else {
            Vec::new()
        };

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            score,
            candidates_before,
            candidates_after,
            deviation,
            remaining,
        });
    }

    Ok(SolveResult {
        success,
        guesses,
        target: target.text().to_string(),
        payout: if success { payout } else { 0 },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_OPENER;
    use crate::wordlists::embedded_vocabulary;

    fn setup(words: &[&str]) -> (Vocabulary, ScoreMatrix) {
        let vocabulary = Vocabulary::from_words(words.iter().copied()).unwrap();
        let matrix = ScoreMatrix::build(&vocabulary);
        (vocabulary, matrix)
    }

    #[test]
    fn solve_three_words() {
        let (vocabulary, matrix) = setup(&["abc", "abd", "xyz"]);
        let config = SolveConfig::new("abd".to_string(), OpenerChoice::Fixed("abc".to_string()));

        let result = solve_word(config, &vocabulary, &matrix).unwrap();

        assert!(result.success);
        assert_eq!(result.payout, 2);
        assert_eq!(result.guesses.len(), 2);
        assert_eq!(result.guesses[0].word, "abc");
        assert_eq!(result.guesses[0].score, 2);
        assert_eq!(result.guesses[0].deviation, None);
        assert_eq!(result.guesses[0].remaining, ["abd"]);
        assert_eq!(result.guesses[1].word, "abd");
        assert!(result.guesses[1].deviation.is_some());
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let vocabulary = embedded_vocabulary().unwrap();
        let matrix = ScoreMatrix::build(&vocabulary);
        let target = vocabulary.get(vocabulary.len() - 1).unwrap().text().to_string();

        let opener = OpenerChoice::Fixed(DEFAULT_OPENER.to_string());
        let mut config = SolveConfig::new(target.clone(), opener);
        config.exhaustive = true;
        let result = solve_word(config, &vocabulary, &matrix).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses[0].word, DEFAULT_OPENER);
        assert_eq!(result.guesses.last().unwrap().word, target);
        for step in &result.guesses[..result.guesses.len() - 1] {
            assert!(step.candidates_after < step.candidates_before);
        }
    }

    #[test]
    fn solve_unknown_target_returns_error() {
        let (vocabulary, matrix) = setup(&["abc", "abd", "xyz"]);
        let config = SolveConfig::new("qqq".to_string(), OpenerChoice::Auto);

        assert!(solve_word(config, &vocabulary, &matrix).is_err());
    }

    #[test]
    fn solve_respects_payout() {
        // Secret of length 1 leaves room for one guess only
        let (vocabulary, matrix) = setup(&["ab", "cd", "e"]);
        let config = SolveConfig::new("e".to_string(), OpenerChoice::Fixed("ab".to_string()));

        let result = solve_word(config, &vocabulary, &matrix).unwrap();
        assert!(!result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.payout, 0);
    }

    #[test]
    fn solve_exhaustive_keeps_going() {
        let (vocabulary, matrix) = setup(&["ab", "cd", "e"]);
        let mut config = SolveConfig::new("e".to_string(), OpenerChoice::Fixed("ab".to_string()));
        config.exhaustive = true;

        let result = solve_word(config, &vocabulary, &matrix).unwrap();
        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().word, "e");
    }
}
