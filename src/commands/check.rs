//! Score a single guess against a target

use crate::core::{EvaluationError, Feedback, evaluate};
use thiserror::Error;

/// Result of scoring one guess
pub struct CheckResult {
    pub target: String,
    pub guess: String,
    pub feedback: Vec<Feedback>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("'{0}' must contain only the letters A-Z")]
    NotLetters(String),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

/// Classify `guess` against `target`
///
/// Words of any equal length are accepted; this does not consult the
/// dictionary.
///
/// # Errors
///
/// Returns an error if either word has non-letter characters or the
/// lengths differ.
pub fn check_guess(target: &str, guess: &str) -> Result<CheckResult, CheckError> {
    let target = normalise(target)?;
    let guess = normalise(guess)?;
    let feedback = evaluate(target.as_bytes(), guess.as_bytes())?;

    Ok(CheckResult {
        target,
        guess,
        feedback,
    })
}

fn normalise(word: &str) -> Result<String, CheckError> {
    let trimmed = word.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(CheckError::NotLetters(word.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}
