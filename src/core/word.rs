//! Secret word representation
//!
//! A Word keeps its original text for display; matching goes through `Letter`
//! so it is case-insensitive.

use super::Letter;
use std::fmt;

/// A secret word to be guessed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The text contains no alphabetic characters at all
    NoLetters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLetters => write!(f, "Word must contain at least one letter"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word, trimming surrounding whitespace
    ///
    /// Casing is preserved. Non-alphabetic characters (spaces, hyphens) are allowed
    /// inside the word but do not need to be guessed.
    ///
    /// # Errors
    /// Returns `WordError::NoLetters` if the text has no alphabetic character.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("  Elephant ").unwrap();
    /// assert_eq!(word.text(), "Elephant");
    ///
    /// assert!(Word::new("1234").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_string();

        if !text.chars().any(char::is_alphabetic) {
            return Err(WordError::NoLetters);
        }

        Ok(Self { text })
    }

    /// Get the word as originally written
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word, including non-letters
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// The letters of the word in order, skipping non-alphabetic characters
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.chars().filter_map(|c| Letter::new(c).ok())
    }

    /// Distinct letters in first-occurrence order
    #[must_use]
    pub fn unique_letters(&self) -> Vec<Letter> {
        let mut unique: Vec<Letter> = Vec::new();
        for letter in self.letters() {
            if !unique.contains(&letter) {
                unique.push(letter);
            }
        }
        unique
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(letters: &[Letter]) -> String {
        letters.iter().map(|l| l.as_char()).collect()
    }

    #[test]
    fn word_keeps_casing() {
        let word = Word::new("Data").unwrap();
        assert_eq!(word.text(), "Data");
        assert_eq!(word.to_string(), "Data");
    }

    #[test]
    fn word_rejects_no_letters() {
        assert_eq!(Word::new(""), Err(WordError::NoLetters));
        assert_eq!(Word::new("   "), Err(WordError::NoLetters));
        assert_eq!(Word::new("42-7"), Err(WordError::NoLetters));
    }

    #[test]
    fn unique_letters_first_occurrence_order() {
        let word = Word::new("Example").unwrap();
        assert_eq!(chars(&word.unique_letters()), "EXAMPL");
    }

    #[test]
    fn letters_skip_non_alphabetic() {
        let word = Word::new("New Zealand").unwrap();
        assert_eq!(word.letters().count(), 10);
        assert_eq!(word.char_count(), 11);
        assert_eq!(chars(&word.unique_letters()), "NEWZALD");
    }
}
