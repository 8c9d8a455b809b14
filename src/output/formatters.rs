//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardColors};
use colored::{ColoredString, Colorize};

/// QWERTY rows as shown under the board
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A single letter tile, colored by its classification
#[must_use]
pub fn tile(letter: char, feedback: Option<Feedback>) -> ColoredString {
    let text = format!(" {letter} ");
    match feedback {
        Some(Feedback::Correct) => text.black().on_green().bold(),
        Some(Feedback::Present) => text.black().on_yellow().bold(),
        Some(Feedback::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// One row of letters with its feedback, as colored tiles
#[must_use]
pub fn colored_row(letters: &[u8], feedback: &[Feedback]) -> String {
    letters
        .iter()
        .zip(feedback)
        .map(|(&l, &f)| tile(char::from(l), Some(f)).to_string())
        .collect()
}

/// Keyboard rows colored with the best-known classification per letter
#[must_use]
pub fn keyboard_lines(colors: &KeyboardColors) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.bytes()
                .map(|b| tile(char::from(b), colors.get(b)).to_string())
                .collect()
        })
        .collect()
}

/// Plain classification letters, e.g. `G-Y--`
#[must_use]
pub fn feedback_code(feedback: &[Feedback]) -> String {
    feedback
        .iter()
        .map(|f| match f {
            Feedback::Correct => 'G',
            Feedback::Present => 'Y',
            Feedback::Absent => '-',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback::{Absent, Correct, Present};

    #[test]
    fn feedback_code_letters() {
        assert_eq!(feedback_code(&[Correct, Absent, Present, Absent, Absent]), "G-Y--");
        assert_eq!(feedback_code(&[]), "");
    }

    #[test]
    fn keyboard_has_three_rows_of_all_letters() {
        let total: usize = KEYBOARD_ROWS.iter().map(|r| r.len()).sum();
        assert_eq!(total, 26);
        assert_eq!(keyboard_lines(&KeyboardColors::new()).len(), 3);
    }

    #[test]
    fn tiles_contain_their_letter() {
        colored::control::set_override(false);
        assert_eq!(tile('A', Some(Correct)).to_string(), " A ");
        assert_eq!(colored_row(b"AB", &[Correct, Present]), " A  B ");
    }
}
