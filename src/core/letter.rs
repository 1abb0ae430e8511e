//! Normalized guess letters

use super::GameError;
use std::fmt;

/// A single alphabetic character, folded to uppercase
///
/// Used as the key of the reveal map, so `'a'` and `'A'` are the same letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// Normalize a raw character into a letter
    ///
    /// # Errors
    /// Returns `GameError::InvalidLetter` if `c` is not alphabetic.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::new('q').unwrap().as_char(), 'Q');
    /// assert!(Letter::new('4').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, GameError> {
        if !c.is_alphabetic() {
            return Err(GameError::InvalidLetter(c));
        }

        Ok(Self(fold_upper(c)))
    }

    /// The uppercase character this letter stands for
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

/// Convert a raw keypress into a `Letter`
///
/// # Errors
/// Returns `GameError::InvalidLetter` for any non-alphabetic input.
pub fn to_letter(c: char) -> Result<Letter, GameError> {
    Letter::new(c)
}

impl TryFrom<char> for Letter {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Characters whose uppercase form is more than one char (e.g. 'ß') keep their own form.
fn fold_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
