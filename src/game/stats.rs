//! In-memory results across the games of one session

use super::board::ROWS;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Index `n` counts wins in `n + 1` guesses
    pub guess_distribution: [usize; ROWS],
}

impl Statistics {
    pub fn record_win(&mut self, guesses: usize) {
        self.games_played += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        if let Some(bucket) = guesses
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get_mut(i))
        {
            *bucket += 1;
        }
    }

    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
    }

    /// Percentage of games won, 0 before any game finishes
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // game counts stay far below 2^52
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
