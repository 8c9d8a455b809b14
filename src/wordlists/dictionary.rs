//! Word supply for a game session
//!
//! Holds the candidate answers and the extra valid guesses. A guess is
//! accepted when it appears in either set; targets are drawn from the
//! answers only.

use super::loader::words_from_slice;
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Errors raised while assembling or querying a dictionary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("dictionary has no candidate answers")]
    NoAnswers,
    #[error("'{0}' is not a candidate answer")]
    NotAnAnswer(String),
}

/// Immutable pair of word sets used for the whole session
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    accepted: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from candidate answers and extra valid guesses
    ///
    /// The two sets may overlap; only their union matters for validity.
    ///
    /// # Errors
    /// Returns `DictionaryError::NoAnswers` if `answers` is empty.
    pub fn new(answers: Vec<Word>, valid_guesses: Vec<Word>) -> Result<Self, DictionaryError> {
        if answers.is_empty() {
            return Err(DictionaryError::NoAnswers);
        }

        let mut accepted: FxHashSet<Word> = valid_guesses.into_iter().collect();
        accepted.extend(answers.iter().cloned());

        Ok(Self { answers, accepted })
    }

    /// Dictionary built from the word lists compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Whether `word` may be submitted as a guess
    #[must_use]
    pub fn is_valid(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }

    /// Case-insensitive validity check on raw text
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.is_valid(&word))
    }

    /// Candidate answers in list order
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of distinct accepted guesses
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Look up `text` among the candidate answers
    ///
    /// # Errors
    /// Returns `DictionaryError::NotAnAnswer` if it is not one.
    pub fn answer(&self, text: &str) -> Result<Word, DictionaryError> {
        Word::new(text)
            .ok()
            .filter(|word| self.answers.contains(word))
            .ok_or_else(|| DictionaryError::NotAnAnswer(text.to_uppercase()))
    }

    /// Pick a target uniformly from the candidate answers
    pub fn random_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // `new` rejects an empty answer list
        self.answers.choose(rng).unwrap_or(&self.answers[0])
    }
}
