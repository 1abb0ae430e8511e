//! Word lists for Hangman
//!
//! Parses categorized word sources and picks the secret word for a round.

mod embedded;
pub mod loader;
mod store;

pub use embedded::DEFAULT_WORDS;
pub use store::{WORD_SEPARATOR, WordCategory, WordStore};
