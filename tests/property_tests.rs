//! Property-based tests for the evaluation engine and board.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::collections::HashMap;
use wordle_game::core::{Feedback, KeyboardColors, Pattern, Word, evaluate};
use wordle_game::game::{Action, Game, GameConfig, GameStatus, ROWS};
use wordle_game::wordlists::Dictionary;
use wordle_game::wordlists::loader::words_from_slice;

prop_compose! {
    /// Equal-length letter pairs over a small alphabet, so repeats are common
    fn word_pair()(len in 1usize..8)
        (target in prop::collection::vec(b'A'..=b'E', len),
         guess in prop::collection::vec(b'A'..=b'E', len)) -> (Vec<u8>, Vec<u8>) {
        (target, guess)
    }
}

fn five_letter_word() -> impl Strategy<Value = Word> {
    "[a-f]{5}".prop_map(|s| Word::new(s).unwrap())
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (b'A'..=b'Z').prop_map(|b| Action::Letter(char::from(b))),
        2 => Just(Action::Delete),
        1 => Just(Action::Submit),
        1 => any::<char>().prop_map(Action::Letter),
    ]
}

proptest! {
    #[test]
    fn correct_only_where_letters_match((target, guess) in word_pair()) {
        let result = evaluate(&target, &guess).unwrap();
        prop_assert_eq!(result.len(), guess.len());
        for (i, f) in result.iter().enumerate() {
            prop_assert_eq!(*f == Feedback::Correct, target[i] == guess[i]);
        }
    }

    #[test]
    fn credit_per_letter_bounded_by_target((target, guess) in word_pair()) {
        let result = evaluate(&target, &guess).unwrap();

        let mut in_target: HashMap<u8, usize> = HashMap::new();
        for &l in &target {
            *in_target.entry(l).or_default() += 1;
        }
        let mut in_guess: HashMap<u8, usize> = HashMap::new();
        for &l in &guess {
            *in_guess.entry(l).or_default() += 1;
        }
        let mut credited: HashMap<u8, usize> = HashMap::new();
        for (&l, f) in guess.iter().zip(&result) {
            if *f != Feedback::Absent {
                *credited.entry(l).or_default() += 1;
            }
        }

        for (letter, count) in credited {
            let available = in_target.get(&letter).copied().unwrap_or(0);
            prop_assert!(count <= available);
            // Credit is exactly the overlap of the two multisets
            prop_assert_eq!(count, available.min(in_guess[&letter]));
        }
    }

    #[test]
    fn mismatched_lengths_rejected(
        target in prop::collection::vec(b'A'..=b'Z', 0..8),
        guess in prop::collection::vec(b'A'..=b'Z', 0..8),
    ) {
        prop_assume!(target.len() != guess.len());
        prop_assert!(evaluate(&target, &guess).is_err());
    }

    #[test]
    fn perfect_iff_equal(guess in five_letter_word(), target in five_letter_word()) {
        let pattern = Pattern::calculate(&guess, &target);
        prop_assert_eq!(pattern.is_perfect(), guess == target);
    }

    #[test]
    fn keyboard_merge_is_order_independent(
        target in five_letter_word(),
        guesses in prop::collection::vec(five_letter_word(), 0..8),
        rotation in 0usize..8,
    ) {
        let rows: Vec<(Word, Pattern)> = guesses
            .iter()
            .map(|g| (g.clone(), Pattern::calculate(g, &target)))
            .collect();

        let forward = KeyboardColors::from_rows(rows.iter().map(|(w, p)| (w, *p)));
        let backward = KeyboardColors::from_rows(rows.iter().rev().map(|(w, p)| (w, *p)));
        let mut rotated_rows = rows.clone();
        if !rotated_rows.is_empty() {
            let k = rotation % rotated_rows.len();
            rotated_rows.rotate_left(k);
        }
        let rotated = KeyboardColors::from_rows(rotated_rows.iter().map(|(w, p)| (w, *p)));

        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward, rotated);

        // Each key holds the maximum classification observed for it
        for (letter, best) in forward.iter() {
            let observed = rows
                .iter()
                .flat_map(|(w, p)| w.letters().iter().zip(p.feedback()))
                .filter(|&(&l, _)| char::from(l) == letter)
                .map(|(_, &f)| f)
                .max();
            prop_assert_eq!(best, observed);
        }
    }

    #[test]
    fn board_invariants_hold_under_any_input(
        actions in prop::collection::vec(arbitrary_action(), 0..200),
    ) {
        let dict = Dictionary::new(
            words_from_slice(&["crane", "slate", "abbey"]),
            words_from_slice(&["aaaaa", "abcde", "zzzzz"]),
        ).unwrap();
        let mut game = Game::new(Word::new("crane").unwrap(), &dict, GameConfig::default());

        let mut last_row = 0;
        for action in actions {
            let before = game.board().clone();
            let was_finished = game.status().is_finished();
            let step = game.apply(action);

            let (row, col) = game.board().cursor();
            prop_assert!(row <= ROWS);
            prop_assert!(col <= 5);
            prop_assert!(row >= last_row);
            prop_assert!(row <= last_row + 1);
            if row == last_row + 1 {
                prop_assert_eq!(col, 0);
            }
            last_row = row;

            if was_finished || step.is_ignored() {
                prop_assert_eq!(game.board(), &before);
            }
            // Submitted rows never change
            prop_assert_eq!(&game.board().cells()[..before.row()], &before.cells()[..before.row()]);
            prop_assert_eq!(&game.board().colors()[..before.row()], &before.colors()[..before.row()]);
        }

        if game.board().row() == ROWS {
            prop_assert!(game.status() != GameStatus::InProgress);
        }
    }
}
