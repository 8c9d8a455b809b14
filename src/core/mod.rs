//! Core domain types for Wordle
//!
//! Pure types with no I/O: words, the guess evaluation engine and the
//! per-letter keyboard merge.

mod keyboard;
mod pattern;
mod word;

pub use keyboard::KeyboardColors;
pub use pattern::{EvaluationError, Feedback, Pattern, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};
