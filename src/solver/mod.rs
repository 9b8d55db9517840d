//! Guess-selection algorithms
//!
//! This module contains the partition solver, its candidate bookkeeping, and a random
//! baseline gamer.

mod candidates;
pub mod deviation;
mod error;
pub mod opener;
mod partition;
pub mod strategy;
mod submatrix;

pub use candidates::CandidateSet;
pub use error::SolverError;
pub use opener::{OpenerRank, rank_openers, resolve_opener};
pub use partition::{PartitionSolver, SolverState};
pub use strategy::{Gamer, GamerType, RandomGamer};
pub use submatrix::Submatrix;
