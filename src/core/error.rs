//! Errors raised by the game engine and word selection

use super::Letter;
use std::fmt;

/// Errors surfaced to the caller while playing a round
///
/// `InvalidLetter` and `RepeatedGuess` are recoverable: the caller should
/// re-prompt and the round continues unchanged. `EmptyWordPool` means no round
/// can be started from the current word source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Raw input is not an alphabetic character
    InvalidLetter(char),
    /// The letter was already guessed this round
    RepeatedGuess(Letter),
    /// No word to select: either no categories at all, or the named category is empty/unknown
    EmptyWordPool(Option<String>),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(c) => write!(f, "Not a letter: {c:?}"),
            Self::RepeatedGuess(letter) => write!(f, "You already guessed the letter {letter}"),
            Self::EmptyWordPool(None) => write!(f, "No word categories available"),
            Self::EmptyWordPool(Some(category)) => {
                write!(f, "Category '{category}' does not contain any words")
            }
        }
    }
}

impl std::error::Error for GameError {}
