//! Command implementations

pub mod analyze;
pub mod openers;
pub mod precompute;
pub mod simple;
pub mod simulate;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use openers::{OpenerEntry, OpenersResult, rank_top_openers};
pub use precompute::{PrecomputeResult, precompute_matrix};
pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationResult, measure_results};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
