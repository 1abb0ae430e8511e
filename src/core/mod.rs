//! Core domain types for Hangman
//!
//! Letters, secret words and the per-round game engine. Nothing here performs
//! I/O, so every rule is unit-testable in isolation.

mod error;
mod game;
mod letter;
mod word;

pub use error::GameError;
pub use game::{GameResult, GameState, LetterState};
pub use letter::{Letter, to_letter};
pub use word::{Word, WordError};
