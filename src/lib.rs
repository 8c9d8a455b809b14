//! Wordle
//!
//! A word-guessing game: guess evaluation engine, board state machine and a
//! terminal front end.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Action, Game, GameConfig, GameStatus};
//! use wordle_game::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded().unwrap();
//! let mut game = Game::new(Word::new("crane").unwrap(), &dictionary, GameConfig::default());
//!
//! for c in "CRANE".chars() {
//!     game.apply(Action::Letter(c));
//! }
//! game.apply(Action::Submit);
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Board state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
