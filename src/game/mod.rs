//! Board state machine
//!
//! A `Game` owns the attempt grid, color grid, cursor, keyboard colors and
//! status message of one session. Front ends feed it `Action`s and carry out
//! the returned `Effect`s; nothing else mutates it.

mod action;
mod board;
mod message;
mod state;
mod stats;

pub use action::Action;
pub use board::{Board, ROWS, Row};
pub use message::{Message, MessageKind, MessageToken};
pub use state::{
    DEFAULT_MESSAGE_TIMEOUT, Effect, Game, GameConfig, GameError, GameStatus,
    INVALID_WORD_MESSAGE, Outcome, Step, WIN_MESSAGE, transition,
};
pub use stats::Statistics;
