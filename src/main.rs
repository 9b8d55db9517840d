//! Overlap Solver - CLI
//!
//! Letter-overlap word game solver with TUI and CLI modes. Each guess splits the remaining
//! words by score; the solver picks the guess with the most even split.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use overlap_solver::{
    commands::{
        SimulationConfig, SolveConfig, analyze_word, measure_results, precompute_matrix,
        rank_top_openers, run_simple, solve_word,
    },
    config::{DEFAULT_GAMES, DEFAULT_SEED, GamerKind, OpenerChoice},
    core::Vocabulary,
    matrix::{self, ScoreMatrix},
    output::{
        print_analysis_result, print_openers_result, print_precompute_result,
        print_simulation_result, print_solve_result,
    },
    wordlists::{embedded_vocabulary, loader::load_from_file},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "overlap_solver",
    about = "Letter-overlap word game solver using balanced score partitions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, 546 ten-letter words) or path to a comma-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Load a precomputed score matrix instead of building one
    #[arg(short, long, global = true)]
    matrix: Option<PathBuf>,

    /// Opening word, or 'auto' to compute it (default: precomputed for the embedded list)
    #[arg(short, long, global = true)]
    opener: Option<String>,

    /// Gamer for simulations: partition (default) or random
    #[arg(short, long, global = true, default_value = "partition")]
    gamer: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Play many games against random secrets and report the mean payout
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value_t = DEFAULT_GAMES)]
        games: usize,

        /// Seed for secret selection and random gamers
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Run on one thread
        #[arg(long)]
        sequential: bool,

        /// Show payout distribution and every game
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Keep guessing after the payout runs out
        #[arg(short, long)]
        exhaustive: bool,
    },

    /// Analyze how a word splits the whole word list
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Rank opening words by deviation
    Openers {
        /// Number of words to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Build the score matrix and write it to a file
    Precompute {
        /// Output path for the matrix artifact
        #[arg(long)]
        output: PathBuf,
    },
}

/// Load the vocabulary based on the -w flag
///
/// Returns the vocabulary and whether it is the embedded one.
fn load_vocabulary(wordlist: &str) -> Result<(Vocabulary, bool)> {
    if wordlist == "embedded" {
        let vocabulary = embedded_vocabulary().context("Embedded word list is invalid")?;
        Ok((vocabulary, true))
    } else {
        Ok((load_from_file(wordlist)?, false))
    }
}

/// Load the matrix artifact if given, otherwise build it
fn load_matrix(path: Option<&Path>, vocabulary: &Vocabulary) -> Result<ScoreMatrix> {
    match path {
        Some(path) => matrix::load_from_file(path, vocabulary)
            .with_context(|| format!("Failed to load score matrix {}", path.display())),
        None => Ok(ScoreMatrix::build(vocabulary)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (vocabulary, embedded) = load_vocabulary(&cli.wordlist)?;
    let opener = cli.opener.as_deref().map_or_else(
        || OpenerChoice::default_for(embedded),
        OpenerChoice::from_name,
    );
    let gamer = GamerKind::from_name(&cli.gamer);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Precompute writes the matrix rather than reading it
    if let Commands::Precompute { output } = &command {
        let result = precompute_matrix(&vocabulary, output, true)?;
        print_precompute_result(&result);
        return Ok(());
    }

    let matrix = load_matrix(cli.matrix.as_deref(), &vocabulary)?;

    match command {
        Commands::Play => run_play_command(&vocabulary, &matrix, &opener),
        Commands::Simple => run_simple(&vocabulary, &matrix, &opener),
        Commands::Simulate {
            games,
            seed,
            sequential,
            verbose,
        } => {
            let mut config = SimulationConfig::new(games, seed, opener);
            config.gamer = gamer;
            config.sequential = sequential;
            config.show_progress = true;
            run_simulate_command(&config, verbose, &vocabulary, &matrix)
        }
        Commands::Solve {
            word,
            verbose,
            exhaustive,
        } => {
            let mut config = SolveConfig::new(word.to_lowercase(), opener);
            config.exhaustive = exhaustive;
            let result = solve_word(config, &vocabulary, &matrix)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word.to_lowercase(), &vocabulary, &matrix)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Openers { top } => {
            let result = rank_top_openers(&vocabulary, &matrix, top, true)?;
            print_openers_result(&result);
            Ok(())
        }
        Commands::Precompute { .. } => Ok(()),
    }
}

fn run_simulate_command(
    config: &SimulationConfig,
    verbose: bool,
    vocabulary: &Vocabulary,
    matrix: &ScoreMatrix,
) -> Result<()> {
    let threads = if config.sequential {
        1
    } else {
        rayon::current_num_threads()
    };
    println!(
        "Simulating {} games over {} words (seed {}, {} thread{})...",
        config.games,
        vocabulary.len(),
        config.seed,
        threads,
        if threads == 1 { "" } else { "s" }
    );

    let result = measure_results(vocabulary, matrix, config)?;
    print_simulation_result(&result, verbose);
    Ok(())
}

fn run_play_command(
    vocabulary: &Vocabulary,
    matrix: &ScoreMatrix,
    opener: &OpenerChoice,
) -> Result<()> {
    use overlap_solver::interactive::{App, run_tui};

    let app = App::new(vocabulary, matrix, opener)?;
    run_tui(app)
}
