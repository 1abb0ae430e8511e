//! Hangman
//!
//! A terminal word-guessing game: pick a category, then guess letters until the
//! word is revealed or the wrong-guess limit is reached.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameResult, GameState, Letter};
//! use hangman::wordlists::WordStore;
//!
//! let store = WordStore::parse_str("Animals\nCat: Dog\n\n");
//! let (_, word) = store.select_in("Animals", &mut rand::rng()).unwrap();
//!
//! let mut game = GameState::new(word.clone(), 6);
//! let result = game.guess(Letter::new('x').unwrap()).unwrap();
//! assert_eq!(result, GameResult::OnGoing);
//! assert_eq!(game.wrong_guess_count(), 1);
//! ```

// Core domain types
pub mod core;

// Word lists and category selection
pub mod wordlists;

// Settings and difficulty
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
