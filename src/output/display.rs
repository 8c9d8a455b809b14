//! Display functions for command results

use super::formatters::{colored_row, feedback_code, keyboard_lines, tile};
use crate::commands::CheckResult;
use crate::game::{Game, GameStatus, MessageKind, ROWS, Statistics};
use colored::Colorize;

/// Print the result of scoring one guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.bright_yellow().bold(),
        result.guess.bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!(
        "\n  {}   {}",
        colored_row(result.guess.as_bytes(), &result.feedback),
        feedback_code(&result.feedback)
    );
    println!();
}

/// Print the board so far, the keyboard, and the status message
pub fn print_game(game: &Game<'_>) {
    let board = game.board();
    println!();
    for row in 0..ROWS {
        let line: String = (0..crate::core::WORD_LENGTH)
            .map(|col| {
                let letter = board.letter(row, col).unwrap_or('·');
                tile(letter, board.colors()[row][col]).to_string()
            })
            .collect();
        let marker = if row == board.row() && game.status() == GameStatus::InProgress {
            "◀".bright_cyan().to_string()
        } else {
            String::new()
        };
        println!("  {line} {marker}");
    }

    println!();
    for line in keyboard_lines(game.keyboard()) {
        println!("  {line}");
    }

    if let Some(message) = game.message() {
        let text = match message.kind {
            MessageKind::Notice => message.text.red().bold(),
            MessageKind::Win => message.text.green().bold(),
            MessageKind::Loss => message.text.yellow().bold(),
        };
        println!("\n  {text}");
    }
    println!();
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("{}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!("   Win rate:        {:.0}%", stats.win_rate());
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let width = count * 30 / most;
        println!(
            "   {}: {}{} {count}",
            i + 1,
            "█".repeat(width).green(),
            "░".repeat(30 - width).bright_black()
        );
    }
}
