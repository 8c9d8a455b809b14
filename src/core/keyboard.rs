//! Best-known classification per letter
//!
//! Feeds keyboard-style feedback. A letter's entry only ever moves up the
//! `Feedback` order: once a letter is known to be correct somewhere, later
//! present/absent sightings of it do not demote it.

use super::pattern::{Feedback, Pattern};
use super::word::Word;

const ALPHABET: usize = 26;

/// Letter → best classification seen so far, `None` while unseen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardColors([Option<Feedback>; ALPHABET]);

const fn slot(letter: u8) -> Option<usize> {
    match letter.to_ascii_uppercase() {
        l @ b'A'..=b'Z' => Some((l - b'A') as usize),
        _ => None,
    }
}

impl KeyboardColors {
    #[must_use]
    pub const fn new() -> Self {
        Self([None; ALPHABET])
    }

    /// Best-known classification for `letter` (either case)
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Feedback> {
        slot(letter).and_then(|i| self.0[i])
    }

    /// Merge one observation; never downgrades
    pub fn record(&mut self, letter: u8, feedback: Feedback) {
        if let Some(i) = slot(letter) {
            self.0[i] = self.0[i].max(Some(feedback));
        }
    }

    /// Merge every letter of a scored guess
    pub fn merge_row(&mut self, guess: &Word, pattern: Pattern) {
        for (&letter, &feedback) in guess.letters().iter().zip(pattern.feedback()) {
            self.record(letter, feedback);
        }
    }

    /// Rebuild from a full history of scored guesses
    #[must_use]
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, Pattern)>,
    {
        let mut colors = Self::new();
        for (guess, pattern) in rows {
            colors.merge_row(guess, pattern);
        }
        colors
    }

    /// Iterate letters `A..=Z` with their classification
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<Feedback>)> + '_ {
        (b'A'..=b'Z').zip(self.0.iter().copied()).map(|(l, f)| (char::from(l), f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback::{Absent, Correct, Present};

    fn scored(guess: &str, target: &str) -> (Word, Pattern) {
        let guess = Word::new(guess).unwrap();
        let pattern = Pattern::calculate(&guess, &Word::new(target).unwrap());
        (guess, pattern)
    }

    #[test]
    fn unseen_letters_are_unset() {
        let colors = KeyboardColors::new();
        assert!(colors.iter().all(|(_, f)| f.is_none()));
        assert_eq!(colors.get(b'Q'), None);
    }

    #[test]
    fn record_never_downgrades() {
        let mut colors = KeyboardColors::new();
        colors.record(b'E', Correct);
        colors.record(b'E', Present);
        colors.record(b'E', Absent);
        assert_eq!(colors.get(b'E'), Some(Correct));

        colors.record(b'R', Present);
        colors.record(b'R', Absent);
        assert_eq!(colors.get(b'R'), Some(Present));
    }

    #[test]
    fn record_upgrades() {
        let mut colors = KeyboardColors::new();
        colors.record(b'A', Absent);
        colors.record(b'A', Present);
        assert_eq!(colors.get(b'a'), Some(Present));
    }

    #[test]
    fn non_letters_ignored() {
        let mut colors = KeyboardColors::new();
        colors.record(b'1', Correct);
        assert_eq!(colors.get(b'1'), None);
        assert_eq!(colors, KeyboardColors::new());
    }

    #[test]
    fn duplicate_in_one_row_keeps_best() {
        // EERIE vs CRANE: the last E is green, the first two are gray
        let (guess, pattern) = scored("eerie", "crane");
        let mut colors = KeyboardColors::new();
        colors.merge_row(&guess, pattern);
        assert_eq!(colors.get(b'E'), Some(Correct));
        assert_eq!(colors.get(b'R'), Some(Present));
        assert_eq!(colors.get(b'I'), Some(Absent));
    }

    #[test]
    fn from_rows_is_order_independent() {
        let rows = [scored("slate", "crane"), scored("crane", "crane")];
        let forward = KeyboardColors::from_rows(rows.iter().map(|(w, p)| (w, *p)));
        let backward = KeyboardColors::from_rows(rows.iter().rev().map(|(w, p)| (w, *p)));
        assert_eq!(forward, backward);
        assert_eq!(forward.get(b'A'), Some(Correct));
        assert_eq!(forward.get(b'S'), Some(Absent));
    }
}
