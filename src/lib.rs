//! Overlap Solver
//!
//! A solver for the letter-overlap word game: the score of a guess is the number of letters it
//! shares with the secret, counting repeats. After each score the solver keeps only the words
//! that would have produced it and guesses the word whose scores split the survivors most evenly.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use overlap_solver::core::{Vocabulary, overlap};
//! use overlap_solver::matrix::ScoreMatrix;
//! use overlap_solver::solver::{Gamer, PartitionSolver};
//!
//! let vocabulary = Vocabulary::from_words(["little", "tweety", "kitten"]).unwrap();
//! let matrix = ScoreMatrix::build(&vocabulary);
//!
//! let little = vocabulary.find("little").unwrap();
//! let tweety = vocabulary.find("tweety").unwrap();
//! assert_eq!(overlap(little, tweety), 3);
//!
//! let mut solver = PartitionSolver::with_computed_opener(&vocabulary, &matrix).unwrap();
//! solver.prepare_for_new_game();
//! let guess = solver.guess_word().unwrap();
//! println!("First guess: {}", guess.text());
//! ```

// Core domain types
pub mod core;

// Pairwise score matrix and its on-disk artifact
pub mod matrix;

// Solving algorithms
pub mod solver;

// Secret word selection
pub mod oracle;

// Game loop and payout
pub mod game;

// Named defaults
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
