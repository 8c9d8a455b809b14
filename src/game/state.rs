//! Game session and its transition function

use super::action::Action;
use super::board::{Board, ROWS};
use super::message::{Message, MessageKind, MessageToken};
use super::stats::Statistics;
use crate::core::{KeyboardColors, Pattern, Word};
use crate::wordlists::Dictionary;
use std::fmt::Write as _;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const INVALID_WORD_MESSAGE: &str = "NOT A VALID WORD";
pub const WIN_MESSAGE: &str = "YOU WIN!";

/// How long a rejection notice stays up by default
pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub message_timeout: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            message_timeout: DEFAULT_MESSAGE_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Recoverable rejection of a player action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("'{0}' is not in the word list")]
    InvalidWord(String),
}

/// Work the caller must carry out after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A new status message is up
    ShowMessage(Message),
    /// Call `Game::clear_message(token)` once `after` has elapsed
    ScheduleClear { token: MessageToken, after: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No state change: row full, column 0, or game over
    Ignored,
    /// A letter was typed or deleted
    Edited,
    /// Submission refused; board untouched
    Rejected(GameError),
    /// Row accepted and scored
    Scored(Pattern),
}

/// Result of applying one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub outcome: Outcome,
    pub effects: Vec<Effect>,
}

impl Step {
    pub(crate) const fn ignored() -> Self {
        Self {
            outcome: Outcome::Ignored,
            effects: Vec::new(),
        }
    }

    const fn edited() -> Self {
        Self {
            outcome: Outcome::Edited,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self.outcome, Outcome::Ignored)
    }
}

/// One game session: target, board, keyboard colors and status message
///
/// The dictionary is borrowed for the whole session and never modified.
#[derive(Debug, Clone)]
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    config: GameConfig,
    target: Word,
    board: Board,
    keyboard: KeyboardColors,
    message: Option<Message>,
    last_token: MessageToken,
    stats: Statistics,
}

impl<'a> Game<'a> {
    #[must_use]
    pub fn new(target: Word, dictionary: &'a Dictionary, config: GameConfig) -> Self {
        info!(target_word = %target, "new game");
        Self {
            dictionary,
            config,
            target,
            board: Board::new(),
            keyboard: KeyboardColors::new(),
            message: None,
            last_token: MessageToken::first(),
            stats: Statistics::default(),
        }
    }

    /// Start a fresh game on the same session
    ///
    /// Statistics carry over. Message tokens keep counting, so clears still
    /// pending from the previous game cannot touch the new one.
    pub fn restart(&mut self, target: Word) {
        info!(target_word = %target, "new game");
        self.target = target;
        self.board = Board::new();
        self.keyboard = KeyboardColors::new();
        self.message = None;
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardColors {
        &self.keyboard
    }

    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Derived from the board: won once the last submitted row is the target
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self
            .board
            .last_submitted()
            .is_some_and(|word| word == self.target)
        {
            GameStatus::Won
        } else if self.board.row() >= ROWS {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Apply one player action
    pub fn apply(&mut self, action: Action) -> Step {
        if self.status().is_finished() {
            return Step::ignored();
        }

        match action {
            Action::Letter(c) => {
                if !c.is_ascii_alphabetic() {
                    return Step::ignored();
                }
                // `is_ascii_alphabetic` guarantees a single byte
                let letter = c.to_ascii_uppercase() as u8;
                if self.board.push_letter(letter) {
                    debug!(letter = %char::from(letter), cursor = ?self.board.cursor(), "typed");
                    Step::edited()
                } else {
                    Step::ignored()
                }
            }
            Action::Delete => {
                if self.board.pop_letter() {
                    debug!(cursor = ?self.board.cursor(), "deleted");
                    Step::edited()
                } else {
                    Step::ignored()
                }
            }
            Action::Submit => self.submit(),
        }
    }

    fn submit(&mut self) -> Step {
        let Some(guess) = self.board.current_word() else {
            return Step::ignored();
        };

        if !self.dictionary.is_valid(&guess) {
            warn!(guess = %guess, "rejected guess");
            let message = self.set_message(INVALID_WORD_MESSAGE.to_string(), MessageKind::Notice);
            let token = message.token;
            return Step {
                outcome: Outcome::Rejected(GameError::InvalidWord(guess.text().to_string())),
                effects: vec![
                    Effect::ShowMessage(message),
                    Effect::ScheduleClear {
                        token,
                        after: self.config.message_timeout,
                    },
                ],
            };
        }

        let attempt = self.board.row();
        let pattern = Pattern::calculate(&guess, &self.target);
        self.board.commit(pattern);
        self.keyboard.merge_row(&guess, pattern);
        debug!(guess = %guess, pattern = %pattern.to_emoji(), attempt = attempt + 1, "scored");

        let mut effects = Vec::new();
        if pattern.is_perfect() {
            info!(guesses = attempt + 1, "game won");
            self.stats.record_win(attempt + 1);
            effects.push(Effect::ShowMessage(
                self.set_message(WIN_MESSAGE.to_string(), MessageKind::Win),
            ));
        } else if attempt == ROWS - 1 {
            info!(target_word = %self.target, "game lost");
            self.stats.record_loss();
            let text = format!("{} WAS THE WORD", self.target);
            effects.push(Effect::ShowMessage(self.set_message(text, MessageKind::Loss)));
        }

        Step {
            outcome: Outcome::Scored(pattern),
            effects,
        }
    }

    fn set_message(&mut self, text: String, kind: MessageKind) -> Message {
        self.last_token = self.last_token.next();
        let message = Message {
            text,
            kind,
            token: self.last_token,
        };
        self.message = Some(message.clone());
        message
    }

    /// Clear the status message if it is still the one `token` was issued for
    ///
    /// Returns whether anything was cleared.
    pub fn clear_message(&mut self, token: MessageToken) -> bool {
        if self.message.as_ref().is_some_and(|m| m.token == token) {
            self.message = None;
            true
        } else {
            false
        }
    }

    /// Emoji summary of a finished game, `None` while in progress
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        let score = match self.status() {
            GameStatus::InProgress => return None,
            GameStatus::Won => self.board.attempts_used().to_string(),
            GameStatus::Lost => "X".to_string(),
        };

        let mut text = format!("Wordle {score}/{ROWS}\n");
        for (_, pattern) in self.board.submitted() {
            let _ = write!(text, "\n{}", pattern.to_emoji());
        }
        Some(text)
    }
}

/// Consume a game state and an action, returning the next state and the step
///
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::{Action, Game, GameConfig, transition};
/// use wordle_game::wordlists::Dictionary;
///
/// let dict = Dictionary::embedded().unwrap();
/// let game = Game::new(Word::new("crane").unwrap(), &dict, GameConfig::default());
/// let (game, step) = transition(game, Action::Letter('C'));
/// assert!(!step.is_ignored());
/// assert_eq!(game.board().cursor(), (0, 1));
/// ```
#[must_use]
pub fn transition(mut game: Game<'_>, action: Action) -> (Game<'_>, Step) {
    let step = game.apply(action);
    (game, step)
}
