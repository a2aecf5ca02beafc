//! Display functions for command results

use super::formatters::{round_bar, score_verdict, spaced_letters};
use crate::commands::CheckReport;
use crate::game::{GameConfig, GameUiState};
use colored::Colorize;

/// Print the round header and scrambled letters for line mode
pub fn print_round(state: &GameUiState, config: &GameConfig) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Round {}/{}  [{}]  Score: {}",
        state.current_word_count.to_string().bright_cyan().bold(),
        config.max_rounds(),
        round_bar(state.current_word_count, config.max_rounds(), 20).green(),
        state.score.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!(
        "\n  Unscramble: {}\n",
        spaced_letters(&state.current_scrambled_word)
            .bright_white()
            .bold()
    );
}

/// Print the end-of-game summary
pub fn print_game_summary(state: &GameUiState, config: &GameConfig) {
    let best = config.best_score();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(" {} ", "GAME OVER".bright_cyan().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    println!("\n  {}", score_verdict(state.score, best).bright_yellow().bold());
    println!(
        "\n  Final score: {} / {}",
        state.score.to_string().bright_green().bold(),
        best
    );
    println!("  Rounds played: {}", state.current_word_count);
    println!();
}

/// Print the result of a word list check
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD LIST CHECK:".bright_cyan().bold(),
        report.source.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Words:       {}", report.word_count);
    println!("   Rounds:      {}", report.max_rounds);

    if let Some((shortest, longest)) = &report.extremes {
        println!("   Shortest:    {shortest} ({} letters)", shortest.len());
        println!("   Longest:     {longest} ({} letters)", longest.len());
    }

    println!();
    match &report.error {
        None => println!("{}", "✅ Word list is playable".green().bold()),
        Some(err) => println!("{}", format!("❌ {err}").red().bold()),
    }
}
