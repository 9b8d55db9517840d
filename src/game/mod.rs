//! One game between a gamer and a secret word
//!
//! The payout starts at the secret's length and drops by one for every wrong guess. The
//! game ends when the gamer guesses the secret (win, remaining payout kept) or the payout
//! reaches zero (loss).

use crate::core::{Word, overlap};
use crate::solver::{Gamer, SolverError};

/// One guess of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: String,
    /// Overlap with the secret
    pub score: u8,
    /// Candidates before the guess was made
    pub candidates_before: usize,
    /// Candidates after the score was applied (unchanged for the winning guess)
    pub candidates_after: usize,
    /// Payout left after this turn
    pub payout: usize,
}

/// Outcome of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: String,
    pub turns: Vec<Turn>,
    pub won: bool,
    /// Remaining payout; 0 for a lost game
    pub payout: usize,
}

impl GameRecord {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.turns.len()
    }
}

/// Play one game under the payout rule
///
/// # Errors
/// Returns the gamer's `SolverError`; for a secret taken from the gamer's vocabulary this
/// means a broken vocabulary/matrix pairing.
///
/// # Examples
/// ```
/// use overlap_solver::core::Vocabulary;
/// use overlap_solver::game::play_game;
/// use overlap_solver::matrix::ScoreMatrix;
/// use overlap_solver::solver::PartitionSolver;
///
/// let vocabulary = Vocabulary::from_words(["abc", "abd", "xyz"]).unwrap();
/// let matrix = ScoreMatrix::build(&vocabulary);
/// let mut solver = PartitionSolver::new(&vocabulary, &matrix, "abc").unwrap();
///
/// let record = play_game(&mut solver, vocabulary.find("abd").unwrap()).unwrap();
/// assert!(record.won);
/// assert_eq!(record.payout, 2);
/// ```
pub fn play_game<'a, G: Gamer<'a>>(gamer: &mut G, secret: &Word) -> Result<GameRecord, SolverError> {
    run(gamer, secret, true)
}

/// Play until the secret is found, ignoring the payout limit
///
/// Always terminates: every wrong guess removes at least one candidate.
///
/// # Errors
/// See [`play_game`].
pub fn play_to_completion<'a, G: Gamer<'a>>(
    gamer: &mut G,
    secret: &Word,
) -> Result<GameRecord, SolverError> {
    run(gamer, secret, false)
}

fn run<'a, G: Gamer<'a>>(
    gamer: &mut G,
    secret: &Word,
    stop_at_zero: bool,
) -> Result<GameRecord, SolverError> {
    gamer.prepare_for_new_game();

    let mut payout = secret.len();
    let mut turns = Vec::new();
    let mut won = false;

    while payout > 0 || !stop_at_zero {
        let guess = gamer.guess_word()?;
        let score = overlap(guess, secret);
        let candidates_before = gamer.candidate_count();

        if guess == secret {
            turns.push(Turn {
                guess: guess.text().to_string(),
                score,
                candidates_before,
                candidates_after: candidates_before,
                payout,
            });
            won = true;
            break;
        }

        payout = payout.saturating_sub(1);
        gamer.result_of_guess(guess.text(), score)?;
        turns.push(Turn {
            guess: guess.text().to_string(),
            score,
            candidates_before,
            candidates_after: gamer.candidate_count(),
            payout,
        });
    }

    Ok(GameRecord {
        secret: secret.text().to_string(),
        turns,
        won,
        payout: if won { payout } else { 0 },
    })
}
