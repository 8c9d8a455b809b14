//! Wordle - CLI
//!
//! Play Wordle in the terminal, with a TUI and a line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::info;
use wordle_game::{
    commands::{check_guess, run_simple},
    core::Word,
    game::{Game, GameConfig},
    logging::init_tracing,
    output::print_check_result,
    wordlists::{ANSWERS, Dictionary, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default), 'answers' (only answers are valid guesses), or path to extra guesses
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seed for choosing target words (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play this word as the first target (must be a candidate answer)
    #[arg(long, global = true)]
    answer: Option<String>,

    /// How long rejection notices stay on screen, in milliseconds
    #[arg(long, global = true, default_value = "500")]
    message_ms: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type one word per line)
    Simple,

    /// Score a guess against a target word
    Check {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },
}

/// Build the dictionary based on the -w flag
///
/// - "all": embedded answers plus embedded extra guesses
/// - "answers": embedded answers only
/// - "<path>": embedded answers plus the words in the file
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    let answers = words_from_slice(ANSWERS);
    let dictionary = match wordlist_mode {
        "all" => Dictionary::embedded()?,
        "answers" => Dictionary::new(answers, Vec::new())?,
        path => {
            let extra = load_from_file(path)
                .with_context(|| format!("failed to load word list from {path}"))?;
            info!(path, words = extra.len(), "loaded custom word list");
            Dictionary::new(answers, extra)?
        }
    };
    Ok(dictionary)
}

fn main() -> Result<()> {
    init_tracing();
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Check { target, guess } => run_check_command(&target, &guess),
        Commands::Simple => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let mut rng = seeded_rng(cli.seed);
            let target = first_target(&cli, &dictionary, &mut rng)?;
            run_simple_command(target, &dictionary, game_config(&cli), &mut rng)
        }
        Commands::Play => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let mut rng = seeded_rng(cli.seed);
            let target = first_target(&cli, &dictionary, &mut rng)?;
            run_play_command(target, &dictionary, game_config(&cli), rng)
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn first_target(cli: &Cli, dictionary: &Dictionary, rng: &mut StdRng) -> Result<Word> {
    match &cli.answer {
        Some(text) => Ok(dictionary.answer(text)?),
        None => Ok(dictionary.random_answer(rng).clone()),
    }
}

fn game_config(cli: &Cli) -> GameConfig {
    GameConfig {
        message_timeout: Duration::from_millis(cli.message_ms),
    }
}

fn run_check_command(target: &str, guess: &str) -> Result<()> {
    let result = check_guess(target, guess)?;
    print_check_result(&result);
    Ok(())
}

fn run_simple_command(
    target: Word,
    dictionary: &Dictionary,
    config: GameConfig,
    rng: &mut StdRng,
) -> Result<()> {
    let mut game = Game::new(target, dictionary, config);
    run_simple(&mut game, rng).context("simple mode failed")
}

fn run_play_command(
    target: Word,
    dictionary: &Dictionary,
    config: GameConfig,
    rng: StdRng,
) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(Game::new(target, dictionary, config), rng);
    run_tui(app)
}
