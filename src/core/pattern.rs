//! Guess evaluation and feedback patterns
//!
//! Each position of a guess is classified against the target word:
//! - Absent (gray): letter not in the target, or every copy already credited
//! - Present (yellow): letter in the target at another position
//! - Correct (green): letter in the correct position
//!
//! Duplicate letters are handled in two passes. All exact matches are
//! removed from the target's letter pool first; only then are the remaining
//! positions credited left to right from what is left of the pool.

use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Classification of a single guessed letter
///
/// Ordered by strength, so `max` picks the best-known classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Emoji square for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error returned when a guess cannot be compared with the target
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("guess has {guess} letters but target has {target}")]
    LengthMismatch { target: usize, guess: usize },
}

/// Classify every letter of `guess` against `target`
///
/// Works on any equal-length letter sequences. The board only ever passes
/// full rows, so a length mismatch is a caller bug rather than a user error.
///
/// # Errors
/// Returns `EvaluationError::LengthMismatch` if the lengths differ.
///
/// # Examples
/// ```
/// use wordle_game::core::{Feedback::*, evaluate};
///
/// let result = evaluate(b"ERASE", b"SPEED").unwrap();
/// assert_eq!(result, vec![Present, Absent, Present, Present, Absent]);
/// ```
pub fn evaluate(target: &[u8], guess: &[u8]) -> Result<Vec<Feedback>, EvaluationError> {
    if target.len() != guess.len() {
        return Err(EvaluationError::LengthMismatch {
            target: target.len(),
            guess: guess.len(),
        });
    }

    let mut result = vec![Feedback::Absent; guess.len()];
    score(target, guess, &mut result);
    Ok(result)
}

/// Two-pass scoring into `out`; all three slices have equal length
fn score(target: &[u8], guess: &[u8], out: &mut [Feedback]) {
    let mut remaining: FxHashMap<u8, usize> = FxHashMap::default();
    for &letter in target {
        *remaining.entry(letter).or_insert(0) += 1;
    }

    // First pass: exact position matches consume the pool before anything else
    for ((slot, &g), &t) in out.iter_mut().zip(guess).zip(target) {
        if g == t {
            *slot = Feedback::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: displaced letters, left to right
    for (slot, &g) in out.iter_mut().zip(guess) {
        if *slot == Feedback::Correct {
            continue;
        }
        *slot = match remaining.get_mut(&g) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Feedback::Present
            }
            _ => Feedback::Absent,
        };
    }
}

/// Feedback pattern for one full-width guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Feedback; WORD_LENGTH]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Feedback::Correct; WORD_LENGTH]);

    /// Create a pattern from explicit classifications
    #[must_use]
    pub const fn new(feedback: [Feedback; WORD_LENGTH]) -> Self {
        Self(feedback)
    }

    /// Calculate the pattern when `guess` is played against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// assert_eq!(pattern.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        score(target.letters(), guess.letters(), &mut result);
        Self(result)
    }

    /// Per-position classifications
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Correct).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Present).count()
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}
