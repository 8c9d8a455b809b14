//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one typed word per guess.

use crate::core::WORD_LENGTH;
use crate::game::{Action, Effect, Game, Step};
use crate::output::{print_game, print_statistics};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng + ?Sized>(game: &mut Game<'_>, rng: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the {WORD_LENGTH}-letter word. Type a word and press Enter.");
    println!("Commands: 'quit' to exit, 'new' for a new game, 'stats' for statistics\n");

    loop {
        print_game(game);

        if game.status().is_finished() {
            if let Some(share) = game.share_text() {
                println!("{share}\n");
            }
            print_statistics(game.statistics());
            println!();

            let Some(answer) = get_user_input("Play again? (yes/no)")? else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            };
            match answer.to_lowercase().as_str() {
                "yes" | "y" => {
                    let target = game.dictionary().random_answer(rng).clone();
                    game.restart(target);
                    println!("\n🔄 New game started!");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let Some(input) = get_user_input(&format!("Guess {}", game.board().row() + 1))? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                let target = game.dictionary().random_answer(rng).clone();
                game.restart(target);
                println!("\n🔄 New game started!");
            }
            "stats" => print_statistics(game.statistics()),
            _ => {
                let step = enter_word(game, &input);
                if step.is_ignored() {
                    println!(
                        "{}",
                        format!("Enter exactly {WORD_LENGTH} letters").red().bold()
                    );
                }
                // Line mode has no timer: a notice is shown once, then dropped
                if let Some(notice) = take_notice(game, &step) {
                    println!("{}", notice.red().bold());
                }
            }
        }
    }
}

/// Replace the current row with `text` and submit it
///
/// Anything other than exactly `WORD_LENGTH` letters leaves the board as it
/// was typed and returns an ignored step.
pub fn enter_word(game: &mut Game<'_>, text: &str) -> Step {
    let actions: Vec<Action> = text.trim().chars().filter_map(Action::letter).collect();
    if actions.len() != WORD_LENGTH || text.trim().chars().count() != WORD_LENGTH {
        return Step::ignored();
    }

    while !game.apply(Action::Delete).is_ignored() {}
    for action in actions {
        game.apply(action);
    }
    game.apply(Action::Submit)
}

/// Text of the notice `step` put up, cleared from the game once taken
fn take_notice(game: &mut Game<'_>, step: &Step) -> Option<String> {
    step.effects.iter().find_map(|effect| match effect {
        Effect::ScheduleClear { token, .. } => {
            let text = game
                .message()
                .filter(|m| m.token == *token)
                .map(|m| m.text.clone());
            game.clear_message(*token);
            text
        }
        Effect::ShowMessage(_) => None,
    })
}

/// Get user input with a prompt; `None` once stdin is closed
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;
    read_trimmed_line(&mut io::stdin().lock())
}

fn read_trimmed_line(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
