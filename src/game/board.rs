//! Attempt grid, color grid and cursor

use crate::core::{Feedback, Pattern, WORD_LENGTH, Word};

/// Number of attempts per game
pub const ROWS: usize = 6;

/// One row of typed letters, `None` for an empty cell
pub type Row = [Option<u8>; WORD_LENGTH];

/// Grid bookkeeping for one game
///
/// Only the cell under the cursor is ever edited. Rows above `row` are
/// submitted and never change again; their colors are written exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Row; ROWS],
    colors: [[Option<Feedback>; WORD_LENGTH]; ROWS],
    row: usize,
    col: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; WORD_LENGTH]; ROWS],
            colors: [[None; WORD_LENGTH]; ROWS],
            row: 0,
            col: 0,
        }
    }

    /// Current row, `ROWS` once every attempt is used
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    #[must_use]
    pub const fn cells(&self) -> &[Row; ROWS] {
        &self.cells
    }

    #[must_use]
    pub const fn colors(&self) -> &[[Option<Feedback>; WORD_LENGTH]; ROWS] {
        &self.colors
    }

    /// Letter at `(row, col)` as a char, if any
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col).copied().flatten())
            .map(char::from)
    }

    #[must_use]
    pub const fn is_row_full(&self) -> bool {
        self.col == WORD_LENGTH
    }

    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.row
    }

    /// Write `letter` under the cursor and advance
    ///
    /// Returns `false` when the row is already full or no rows remain.
    pub fn push_letter(&mut self, letter: u8) -> bool {
        if self.row >= ROWS || self.col >= WORD_LENGTH {
            return false;
        }
        self.cells[self.row][self.col] = Some(letter);
        self.col += 1;
        true
    }

    /// Step back and clear the previous cell
    ///
    /// Returns `false` at column 0.
    pub fn pop_letter(&mut self) -> bool {
        if self.row >= ROWS || self.col == 0 {
            return false;
        }
        self.col -= 1;
        self.cells[self.row][self.col] = None;
        true
    }

    /// The current row as a word, once it is full
    #[must_use]
    pub fn current_word(&self) -> Option<Word> {
        if self.row >= ROWS || !self.is_row_full() {
            return None;
        }
        Word::from_cells(&self.cells[self.row])
    }

    /// Record `pattern` for the current row and move to the next one
    pub(crate) fn commit(&mut self, pattern: Pattern) {
        if self.row >= ROWS {
            return;
        }
        self.colors[self.row] = pattern.feedback().map(Some);
        self.row += 1;
        self.col = 0;
    }

    /// Submitted rows with their patterns, oldest first
    pub fn submitted(&self) -> impl Iterator<Item = (Word, Pattern)> + '_ {
        self.cells[..self.row]
            .iter()
            .zip(&self.colors[..self.row])
            .filter_map(|(cells, colors)| {
                let word = Word::from_cells(cells)?;
                let mut feedback = [Feedback::Absent; WORD_LENGTH];
                for (slot, color) in feedback.iter_mut().zip(colors) {
                    *slot = (*color)?;
                }
                Some((word, Pattern::new(feedback)))
            })
    }

    /// Most recently submitted word
    #[must_use]
    pub fn last_submitted(&self) -> Option<Word> {
        self.row
            .checked_sub(1)
            .and_then(|r| Word::from_cells(&self.cells[r]))
    }
}
