//! Simulation command
//!
//! Plays many games against a uniform random oracle and reports the mean remaining payout.
//! Every game gets its own RNG seeded from `seed + game_index`, so a run is reproducible for a
//! given seed whether it runs on one thread or many.

use crate::config::{GamerKind, OpenerChoice};
use crate::core::Vocabulary;
use crate::game::{GameRecord, play_game};
use crate::matrix::ScoreMatrix;
use crate::oracle::{Oracle, UniformOracle};
use crate::solver::{Gamer, GamerType, SolverError, resolve_opener};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub gamer: GamerKind,
    pub opener: OpenerChoice,
    /// Run games on one thread instead of the rayon pool
    pub sequential: bool,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64, opener: OpenerChoice) -> Self {
        Self {
            games,
            seed,
            gamer: GamerKind::Partition,
            opener,
            sequential: false,
            show_progress: false,
        }
    }
}

/// Aggregate result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub gamer_name: String,
    pub oracle_name: String,
    pub opener: String,
    pub games: usize,
    pub total_payout: usize,
    /// Mean remaining payout per game
    pub mean_payout: f64,
    pub wins: usize,
    /// Guess count -> games won with that many guesses
    pub guess_distribution: BTreeMap<usize, usize>,
    /// Remaining payout -> games
    pub payout_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
    /// Per-game records, in game order
    pub records: Vec<GameRecord>,
}

impl SimulationResult {
    fn from_records(
        gamer_name: &str,
        oracle_name: &str,
        opener: &str,
        records: Vec<GameRecord>,
        duration: Duration,
    ) -> Self {
        let games = records.len();
        let total_payout: usize = records.iter().map(|r| r.payout).sum();
        let wins = records.iter().filter(|r| r.won).count();

        let mut guess_distribution = BTreeMap::new();
        let mut payout_distribution = BTreeMap::new();
        for record in &records {
            if record.won {
                *guess_distribution.entry(record.guess_count()).or_insert(0) += 1;
            }
            *payout_distribution.entry(record.payout).or_insert(0) += 1;
        }

        let mean_payout = if games > 0 {
            total_payout as f64 / games as f64
        } else {
            0.0
        };

        Self {
            gamer_name: gamer_name.to_string(),
            oracle_name: oracle_name.to_string(),
            opener: opener.to_string(),
            games,
            total_payout,
            mean_payout,
            wins,
            guess_distribution,
            payout_distribution,
            duration,
            games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
            records,
        }
    }

    /// Games lost, as a share of all games
    #[must_use]
    pub fn loss_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        (self.games - self.wins) as f64 / self.games as f64
    }
}

/// Run `config.games` games and aggregate the results
///
/// # Errors
///
/// Returns an error if the matrix does not belong to the vocabulary, the opener is unknown,
/// or a game hits a solver contract violation.
///
/// # Examples
/// ```
/// use overlap_solver::commands::simulate::{SimulationConfig, measure_results};
/// use overlap_solver::config::OpenerChoice;
/// use overlap_solver::core::Vocabulary;
/// use overlap_solver::matrix::ScoreMatrix;
///
/// let vocabulary = Vocabulary::from_words(["abc", "abd", "xyz", "bcd"]).unwrap();
/// let matrix = ScoreMatrix::build(&vocabulary);
///
/// let config = SimulationConfig::new(20, 7, OpenerChoice::Auto);
/// let result = measure_results(&vocabulary, &matrix, &config).unwrap();
/// assert_eq!(result.games, 20);
/// assert!(result.mean_payout > 0.0);
/// ```
pub fn measure_results(
    vocabulary: &Vocabulary,
    matrix: &ScoreMatrix,
    config: &SimulationConfig,
) -> Result<SimulationResult> {
    matrix
        .verify(vocabulary)
        .context("Score matrix does not match the word list")?;

    // Resolve an automatic opener once instead of once per game
    let opener = resolve_opener(vocabulary, matrix, &config.opener)?;
    let opener_choice = OpenerChoice::Fixed(opener.text().to_string());

    let progress = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb.set_message(format!("{} games", config.games));
        pb
    } else {
        ProgressBar::hidden()
    };

    let gamer_name = GamerType::new(
        config.gamer,
        vocabulary,
        matrix,
        &opener_choice,
        StdRng::seed_from_u64(config.seed),
    )?
    .name();
    let oracle_name = UniformOracle::new(StdRng::seed_from_u64(config.seed))
        .name()
        .to_string();

    let play = |i: usize| -> Result<GameRecord, SolverError> {
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
        let gamer_rng = StdRng::from_rng(&mut rng);

        let mut gamer = GamerType::new(config.gamer, vocabulary, matrix, &opener_choice, gamer_rng)?;
        let mut oracle = UniformOracle::new(rng);
        let secret = oracle
            .pick_word(vocabulary)
            .ok_or(SolverError::NoCandidates)?;

        let record = play_game(&mut gamer, secret)?;
        progress.inc(1);
        Ok(record)
    };

    let start = Instant::now();
    let records: Vec<GameRecord> = if config.sequential {
        (0..config.games).map(play).collect::<Result<_, _>>()?
    } else {
        (0..config.games)
            .into_par_iter()
            .map(play)
            .collect::<Result<_, _>>()?
    };
    let duration = start.elapsed();
    progress.finish_with_message("Complete!");

    Ok(SimulationResult::from_records(
        gamer_name,
        &oracle_name,
        opener.text(),
        records,
        duration,
    ))
}
