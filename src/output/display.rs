//! Display functions for command results

use super::formatters::{count_bar, create_progress_bar, fingerprint_hex, score_label};
use crate::commands::{
    AnalysisResult, OpenersResult, PrecomputeResult, SimulationResult, SolveResult,
};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let length = result.target.len();
    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} scored {}",
            turn,
            step.word.to_uppercase(),
            score_label(step.score, length).bright_yellow()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            match step.deviation {
                Some(deviation) => println!("  Deviation:  {deviation:.3}"),
                None => println!("  Deviation:  (opening word)"),
            }

            if !step.remaining.is_empty() && step.word != result.target {
                let words: Vec<String> = step.remaining.iter().map(|w| w.to_uppercase()).collect();
                println!("  Remaining:  {}", words.join(", ").bright_black());
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses with payout {} left!",
                result.guesses.len(),
                result.payout
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Payout ran out after {} guesses",
                result.guesses.len()
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against all {} words:", result.total_words);
    println!(
        "   Deviation:   {}",
        format!("{:.3}", result.deviation).bright_yellow()
    );
    println!(
        "   Rank:        {} of {} (best: {} at {:.3})",
        result.rank,
        result.total_words,
        result.best_word.to_uppercase(),
        result.best_deviation
    );
    println!("   Groups:      {}", result.groups.len());
    println!("   Largest:     {} words", result.largest_group());
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining()
    );

    println!("\n📈 {}", "Score groups:".bright_cyan().bold());
    let max_count = result.groups.values().copied().max().unwrap_or(0);
    for (score, &count) in &result.groups {
        let pct = count as f64 / result.total_words as f64 * 100.0;
        println!(
            "   {score:>2}: {} {count:4} ({pct:5.1}%)",
            count_bar(count, max_count, 40).green()
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n\"{}\" scored {} against \"{}\"",
        result.gamer_name,
        format!("{:.3}", result.mean_payout).bright_yellow().bold(),
        result.oracle_name
    );

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!("   Opening word:     {}", result.opener.to_uppercase());
    println!(
        "   Mean payout:      {}",
        format!("{:.3}", result.mean_payout).bright_yellow().bold()
    );
    println!(
        "   Wins:             {} {}",
        result.wins,
        format!("({:.1}%)", (1.0 - result.loss_rate()) * 100.0).green()
    );
    if result.wins < result.games {
        println!(
            "   Losses:           {} {}",
            result.games - result.wins,
            format!("({:.1}%)", result.loss_rate() * 100.0).red()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Guess distribution (wins):".bright_cyan().bold());
    let max_count = result.guess_distribution.values().copied().max().unwrap_or(0);
    for (&guesses, &count) in &result.guess_distribution {
        let pct = count as f64 / result.games as f64 * 100.0;
        println!(
            "   {guesses:>2}: {} {count:4} ({pct:5.1}%)",
            count_bar(count, max_count, 40).green()
        );
    }

    if verbose {
        println!("\n💰 {}", "Payout distribution:".bright_cyan().bold());
        let max_count = result.payout_distribution.values().copied().max().unwrap_or(0);
        for (&payout, &count) in &result.payout_distribution {
            println!(
                "   {payout:>2}: {} {count:4}",
                count_bar(count, max_count, 40).yellow()
            );
        }

        println!("\n🎯 {}", "Games:".bright_cyan().bold());
        for (i, record) in result.records.iter().enumerate() {
            let guesses: Vec<&str> = record.turns.iter().map(|t| t.guess.as_str()).collect();
            let outcome = if record.won {
                format!("payout {}", record.payout).green()
            } else {
                "lost".to_string().red()
            };
            println!(
                "   {:>4}. {} {} [{}]",
                i + 1,
                record.secret.to_uppercase().bright_white(),
                outcome,
                guesses.join(" → ")
            );
        }
    }
}

/// Print the opener ranking
pub fn print_openers_result(result: &OpenersResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\nRanked {} words in {:.2}s (lower deviation splits more evenly)\n",
        result.total_words,
        result.duration.as_secs_f64()
    );

    let worst = result
        .entries
        .iter()
        .map(|e| e.deviation)
        .fold(0.0_f64, f64::max);
    for entry in &result.entries {
        let word = entry.word.to_uppercase();
        let word = if entry.rank == 1 {
            word.bright_green().bold()
        } else {
            word.normal()
        };
        println!(
            "  {:>3}. {:<12} {} {:8.3}  groups {:>2}  largest {:>4}",
            entry.rank,
            word,
            create_progress_bar(entry.deviation, worst, 20).bright_black(),
            entry.deviation,
            entry.groups,
            entry.largest_group
        );
    }
}

/// Print where a matrix artifact was written
pub fn print_precompute_result(result: &PrecomputeResult) {
    println!("\n{}", "✅ Score matrix written".green().bold());
    println!("   Path:         {}", result.path.display());
    println!(
        "   Dimension:    {} x {}",
        result.dimension, result.dimension
    );
    println!("   Size:         {} bytes", result.bytes);
    println!("   Fingerprint:  {}", fingerprint_hex(result.fingerprint));
    println!("   Time taken:   {:.2}s", result.duration.as_secs_f64());
}
