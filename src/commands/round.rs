//! One round of play: word selection plus the engine it drives
//!
//! Both front ends go through `Round`, so selection, input normalization and
//! logging behave the same in line mode and full-screen mode.

use crate::core::{GameError, GameResult, GameState, to_letter};
use crate::wordlists::WordStore;
use rand::Rng;
use tracing::{debug, info, trace};

/// A round in progress together with the category its word came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub category: String,
    pub state: GameState,
}

impl Round {
    /// Select a word and start a round
    ///
    /// With `category` set, the word comes from that category; otherwise both
    /// category and word are random.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordPool` if no word can be selected.
    pub fn start<R: Rng>(
        store: &WordStore,
        category: Option<&str>,
        max_wrong_guesses: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let (name, word) = match category {
            Some(name) => store.select_in(name, rng)?,
            None => store.select_random(rng)?,
        };

        info!(
            category = name,
            letters = word.unique_letters().len(),
            max_wrong_guesses,
            "round started"
        );
        trace!(word = %word, "secret word");

        Ok(Self {
            category: name.to_string(),
            state: GameState::new(word.clone(), max_wrong_guesses),
        })
    }

    /// Normalize a raw character and apply it as a guess
    ///
    /// Invalid input is rejected before reaching the engine and never costs a guess.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidLetter` for non-alphabetic input and
    /// `GameError::RepeatedGuess` for a letter already tried.
    pub fn guess_char(&mut self, c: char) -> Result<GameResult, GameError> {
        let letter = to_letter(c)?;
        let outcome = self.state.guess(letter);

        match &outcome {
            Ok(result) => {
                debug!(
                    %letter,
                    state = ?self.state.letter_state(letter),
                    wrong = self.state.wrong_guess_count(),
                    ?result,
                    "guess applied"
                );
                if result.is_over() {
                    info!(category = %self.category, ?result, "round finished");
                }
            }
            Err(e) => debug!(%letter, error = %e, "guess rejected"),
        }

        outcome
    }

    #[must_use]
    pub const fn result(&self) -> GameResult {
        self.state.evaluate()
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.result().is_over()
    }
}
