//! Display functions for command results

use super::formatters::{colored_row, verdict_label};
use crate::commands::{CheckResult, DailyInfo};
use crate::game::{GameState, GameStatus};
use colored::Colorize;
use std::io::{self, Write};

/// Print the end-of-game banner: a win message, or the target on a loss
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_game_over<W: Write>(state: &GameState, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    match state.status() {
        GameStatus::Won => {
            let used = state.attempts_used();
            writeln!(out, "  {}", "🎉 You Win".bright_green().bold())?;
            writeln!(
                out,
                "  Solved in {} {}",
                used.to_string().bright_cyan().bold(),
                if used == 1 { "guess" } else { "guesses" }
            )?;
        }
        GameStatus::Lost => {
            let target = state
                .revealed_target()
                .map(|w| w.text().to_uppercase())
                .unwrap_or_default();
            writeln!(out, "  {}", target.bright_yellow().bold())?;
        }
        GameStatus::InProgress => {}
    }

    writeln!(out, "\n{}", indent(&state.share_grid()))?;
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the verdicts for one checked guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking {} against {}",
        result.guess.to_uppercase().bright_white().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", colored_row(&result.guess_word, &result.feedback));
    println!("  {}\n", result.feedback.to_emoji());

    for (letter, verdict) in result.guess.chars().zip(result.feedback.verdicts()) {
        println!(
            "  {}  {}",
            letter.to_uppercase().to_string().bold(),
            verdict_label(*verdict)
        );
    }
    println!();
}

/// Print the daily puzzle summary
pub fn print_daily_info(info: &DailyInfo) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} #{} ",
        "DAILY PUZZLE".bright_cyan().bold(),
        info.puzzle_number.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Date:         {}", info.date);
    println!("   Epoch:        {}", info.epoch);
    println!("   Language:     {}", info.locale);
    println!("   Target words: {}", info.target_count);
    println!("   Dictionary:   {}", info.dictionary_count);
    if let Some(target) = &info.target {
        println!(
            "   Answer:       {}",
            target.to_uppercase().bright_green().bold()
        );
    }
    println!();
}
