//! Simple interactive CLI mode
//!
//! Text-based interactive solver without TUI. The player thinks of a vocabulary word and
//! reports the overlap score of each suggested guess.

use crate::config::OpenerChoice;
use crate::core::Vocabulary;
use crate::matrix::ScoreMatrix;
use crate::solver::{Gamer, PartitionSolver, SolverError};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How many remaining candidates are listed
const LIST_LIMIT: usize = 10;

/// What the player answered for a suggested guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reply {
    Score(u8),
    Win,
    New,
    Undo,
    Quit,
}

impl Reply {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "n" => Some(Self::New),
            "undo" | "u" => Some(Self::Undo),
            "win" | "correct" | "yes" | "solved" => Some(Self::Win),
            other => other.parse().ok().map(Self::Score),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, or the solver cannot be
/// built for this vocabulary and matrix.
pub fn run_simple(
    vocabulary: &Vocabulary,
    matrix: &ScoreMatrix,
    opener: &OpenerChoice,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(vocabulary, matrix, opener, stdin.lock(), stdout.lock())
}

/// Interactive session over any input/output pair
///
/// Ends on `quit`, on end of input, or when the player declines another game.
///
/// # Errors
///
/// Returns an error on I/O failure or a solver contract violation other than an
/// inconsistent score (which is reported and rolled back).
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_session<R: BufRead, W: Write>(
    vocabulary: &Vocabulary,
    matrix: &ScoreMatrix,
    opener: &OpenerChoice,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let mut solver = PartitionSolver::from_choice(vocabulary, matrix, opener)?;
    solver.prepare_for_new_game();

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║              Overlap Solver - Interactive Mode               ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Think of one of the {} words in the list.", vocabulary.len())?;
    writeln!(out, "After each guess, enter its score: the number of letters it shares")?;
    writeln!(out, "with your word, counting repeats (little vs tweety = 3).")?;
    writeln!(out, "Type 'win' if the guess is your word.\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last score\n")?;

    // Solver state before each reported score
    let mut history: Vec<PartitionSolver> = Vec::new();
    let mut guesses: Vec<(String, u8)> = Vec::new();

    loop {
        let guess = solver.guess_word()?;
        let turn = guesses.len() + 1;
        let candidates = solver.candidate_count();

        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(out, "Turn {turn}: {candidates} candidates remaining")?;
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(
            out,
            "\n📊 Suggested guess: {}",
            guess.text().to_uppercase().bright_white().bold()
        )?;
        match solver.deviation_of(guess.text()) {
            Some(deviation) => writeln!(out, "   Deviation:        {deviation:.3}\n")?,
            None => writeln!(out, "   Opening word\n")?,
        }

        if turn > 1 && candidates <= LIST_LIMIT {
            writeln!(out, "Remaining candidates:")?;
            for candidate in solver.candidates() {
                writeln!(out, "  • {}", candidate.text().to_uppercase())?;
            }
            writeln!(out)?;
        }

        let reply = loop {
            let Some(line) = prompt(&mut input, &mut out, "Enter score ('win', or command)")? else {
                return Ok(());
            };
            match Reply::parse(&line) {
                Some(Reply::Score(score)) if usize::from(score) > guess.len() => {
                    writeln!(
                        out,
                        "❌ A score cannot exceed the guess length ({})\n",
                        guess.len()
                    )?;
                }
                Some(reply) => break reply,
                None => writeln!(out, "❌ Invalid input! Enter a number, 'win', or a command\n")?,
            }
        };

        match reply {
            Reply::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Reply::New => {
                solver.prepare_for_new_game();
                history.clear();
                guesses.clear();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Reply::Undo => {
                if let Some(previous) = history.pop() {
                    solver = previous;
                    guesses.pop();
                    writeln!(out, "✓ Undone! Back to turn {}\n", guesses.len() + 1)?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
            }
            Reply::Score(score) => {
                history.push(solver.clone());
                match solver.result_of_guess(guess.text(), score) {
                    Ok(()) => guesses.push((guess.text().to_string(), score)),
                    Err(SolverError::Exhausted { .. }) => {
                        if let Some(previous) = history.pop() {
                            solver = previous;
                        }
                        writeln!(
                            out,
                            "\n❌ No word in the list gives that score. Check it and try again.\n"
                        )?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Reply::Win => {
                guesses.push((guess.text().to_string(), guess.len() as u8));
                print_victory(&mut out, &guesses)?;

                let again = prompt(&mut input, &mut out, "Play again? (yes/no)")?;
                let again = again.map(|a| a.to_lowercase());
                if !matches!(again.as_deref(), Some("yes" | "y")) {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                solver.prepare_for_new_game();
                history.clear();
                guesses.clear();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
        }
    }
}

fn print_victory<W: Write>(out: &mut W, guesses: &[(String, u8)]) -> io::Result<()> {
    let turns = guesses.len();

    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(out, "{}", "    🎉  S O L V E D !  🎉    ".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    )?;

    writeln!(out, "\n  Guess history:")?;
    for (i, (word, score)) in guesses.iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.to_uppercase().bright_white().bold(),
            score
        )?;
    }
    writeln!(out, "\n{}\n", "═".repeat(70).bright_cyan())?;
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
