//! Logical player actions

/// The three things a player can do
///
/// Front ends translate their own key or button events into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type a letter into the next cell
    Letter(char),
    /// Erase the last typed letter of the current row
    Delete,
    /// Submit the current row as a guess
    Submit,
}

impl Action {
    /// Letter action for `c`, normalised to uppercase
    ///
    /// Returns `None` for anything outside A–Z.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Action;
    ///
    /// assert_eq!(Action::letter('q'), Some(Action::Letter('Q')));
    /// assert_eq!(Action::letter('7'), None);
    /// ```
    #[must_use]
    pub const fn letter(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self::Letter(c.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Parse a key name as used by on-screen keyboards
    ///
    /// Accepts a single letter, `Enter` and `Backspace`.
    #[must_use]
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Submit),
            "Backspace" => Some(Self::Delete),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::letter(c),
                    _ => None,
                }
            }
        }
    }
}
