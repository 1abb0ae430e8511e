//! Game state engine for a single round
//!
//! The engine owns the secret word, the reveal map and the guess counters.
//! It performs no I/O: callers feed it one `Letter` at a time and render the
//! state it exposes.

use super::{GameError, Letter, Word};
use rustc_hash::FxHashMap;

/// Reveal status of a guessed or unguessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    /// Part of the word, not guessed yet
    Unrevealed,
    /// Part of the word and guessed
    Revealed,
    /// Guessed, but not part of the word
    Missed,
}

/// Outcome of evaluating the state of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    OnGoing,
    Won,
    Lost,
}

impl GameResult {
    /// Won and Lost are terminal; nothing transitions out of them
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::OnGoing)
    }
}

/// Authoritative state of one round
///
/// The set of keys in the reveal map is fixed at construction: exactly the
/// distinct letters of the secret word. Misses are kept in a separate list so
/// a repeated miss is never counted twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret_word: Word,
    letter_states: FxHashMap<Letter, LetterState>,
    letter_order: Vec<Letter>,
    missed: Vec<Letter>,
    wrong_guess_count: usize,
    max_wrong_guesses: usize,
    unique_letter_count: usize,
    revealed_letter_count: usize,
}

impl GameState {
    /// Start a round for `word`, allowing `max_wrong_guesses` misses
    ///
    /// A limit of zero is raised to one.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameResult, GameState, Letter, Word};
    ///
    /// let mut game = GameState::new(Word::new("Data").unwrap(), 3);
    /// assert_eq!(game.render_word(), "_ _ _ _");
    ///
    /// game.guess(Letter::new('a').unwrap()).unwrap();
    /// assert_eq!(game.render_word(), "_ a _ a");
    /// assert_eq!(game.evaluate(), GameResult::OnGoing);
    /// ```
    #[must_use]
    pub fn new(word: Word, max_wrong_guesses: usize) -> Self {
        let letter_order = word.unique_letters();
        let letter_states: FxHashMap<Letter, LetterState> = letter_order
            .iter()
            .map(|&letter| (letter, LetterState::Unrevealed))
            .collect();

        Self {
            unique_letter_count: letter_order.len(),
            secret_word: word,
            letter_states,
            letter_order,
            missed: Vec::new(),
            wrong_guess_count: 0,
            max_wrong_guesses: max_wrong_guesses.max(1),
            revealed_letter_count: 0,
        }
    }

    /// Apply one guess and return the resulting evaluation
    ///
    /// Guessing after the round is over is not prevented; stopping at a terminal
    /// result is the caller's job.
    ///
    /// # Errors
    /// Returns `GameError::RepeatedGuess` if the letter was already guessed,
    /// whether it was a hit or a miss. The state is left untouched in that case
    /// and `evaluate()` still reports the current result.
    pub fn guess(&mut self, letter: Letter) -> Result<GameResult, GameError> {
        match self.letter_states.get(&letter).copied() {
            None if self.missed.contains(&letter) => Err(GameError::RepeatedGuess(letter)),
            None => {
                self.missed.push(letter);
                self.wrong_guess_count += 1;
                Ok(self.evaluate())
            }
            Some(LetterState::Revealed | LetterState::Missed) => {
                Err(GameError::RepeatedGuess(letter))
            }
            Some(LetterState::Unrevealed) => {
                self.letter_states.insert(letter, LetterState::Revealed);
                self.revealed_letter_count += 1;
                Ok(self.evaluate())
            }
        }
    }

    /// Evaluate win/loss; a completed word wins even when the miss limit is reached
    #[must_use]
    pub const fn evaluate(&self) -> GameResult {
        if self.revealed_letter_count >= self.unique_letter_count {
            GameResult::Won
        } else if self.wrong_guess_count >= self.max_wrong_guesses {
            GameResult::Lost
        } else {
            GameResult::OnGoing
        }
    }

    /// Display form of the word: revealed characters in original casing,
    /// `_` for hidden letters, separated by single spaces
    ///
    /// Non-alphabetic characters are never hidden.
    #[must_use]
    pub fn render_word(&self) -> String {
        let shown: Vec<String> = self
            .secret_word
            .text()
            .chars()
            .map(|c| match Letter::new(c) {
                Ok(letter) if self.letter_state(letter) == Some(LetterState::Revealed) => c,
                Ok(_) => '_',
                Err(_) => c,
            })
            .map(String::from)
            .collect();

        shown.join(" ")
    }

    /// State of a letter, or `None` if it is neither in the word nor guessed
    #[must_use]
    pub fn letter_state(&self, letter: Letter) -> Option<LetterState> {
        self.letter_states.get(&letter).copied().or_else(|| {
            self.missed
                .contains(&letter)
                .then_some(LetterState::Missed)
        })
    }

    /// Reveal map entries in first-occurrence order
    pub fn letter_states(&self) -> impl Iterator<Item = (Letter, LetterState)> + '_ {
        self.letter_order
            .iter()
            .map(|letter| (*letter, self.letter_states[letter]))
    }

    /// Missed letters in the order they were guessed
    #[must_use]
    pub fn missed(&self) -> &[Letter] {
        &self.missed
    }

    #[must_use]
    pub const fn secret_word(&self) -> &Word {
        &self.secret_word
    }

    #[must_use]
    pub const fn wrong_guess_count(&self) -> usize {
        self.wrong_guess_count
    }

    #[must_use]
    pub const fn max_wrong_guesses(&self) -> usize {
        self.max_wrong_guesses
    }

    /// Misses remaining before the round is lost
    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        self.max_wrong_guesses.saturating_sub(self.wrong_guess_count)
    }

    #[must_use]
    pub const fn unique_letter_count(&self) -> usize {
        self.unique_letter_count
    }

    #[must_use]
    pub const fn revealed_letter_count(&self) -> usize {
        self.revealed_letter_count
    }
}
