//! Plain-text rendering of a round
//!
//! Everything here turns engine state into display lines without touching the
//! terminal, so both front ends and the tests share the same output.

use crate::core::{GameResult, GameState, Letter, LetterState};

const CLASSIC_STAGES: [&str; 10] = [
    "\n\n\n\n\n\n=========",
    "\n      |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n      |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// ASCII-art stages of the gallows, from empty to complete
///
/// The stage shown is scaled so the last stage appears exactly when the
/// wrong-guess limit is reached, whatever the limit is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallows {
    stages: Vec<String>,
}

impl Default for Gallows {
    fn default() -> Self {
        Self::classic()
    }
}

impl Gallows {
    /// Build from custom stages; an empty list gets a single blank stage
    #[must_use]
    pub fn new(stages: Vec<String>) -> Self {
        if stages.is_empty() {
            return Self {
                stages: vec![String::new()],
            };
        }
        Self { stages }
    }

    /// The ten-stage drawing
    #[must_use]
    pub fn classic() -> Self {
        Self::new(CLASSIC_STAGES.iter().map(ToString::to_string).collect())
    }

    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Index of the stage for `wrong` misses out of `max`
    #[must_use]
    pub fn stage_index(&self, wrong: usize, max: usize) -> usize {
        let last = self.stages.len() - 1;
        if max == 0 || wrong >= max {
            return last;
        }
        wrong * last / max
    }

    /// Drawing for `wrong` misses out of `max`
    #[must_use]
    pub fn stage(&self, wrong: usize, max: usize) -> &str {
        &self.stages[self.stage_index(wrong, max)]
    }
}

/// Status of every letter A–Z for an on-screen letter board
///
/// `None` means the letter has not been guessed.
#[must_use]
pub fn letter_board(state: &GameState) -> Vec<(char, Option<LetterState>)> {
    ('A'..='Z')
        .map(|c| {
            let status = Letter::new(c)
                .ok()
                .and_then(|letter| state.letter_state(letter))
                .filter(|s| *s != LetterState::Unrevealed);
            (c, status)
        })
        .collect()
}

/// Missed letters joined by spaces
#[must_use]
pub fn missed_letters(state: &GameState) -> String {
    state
        .missed()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line summary of a finished round
#[must_use]
pub fn result_message(state: &GameState, result: GameResult) -> Option<String> {
    match result {
        GameResult::OnGoing => None,
        GameResult::Won => Some(format!(
            "Congratulations, you've won! The word was: {}",
            state.secret_word()
        )),
        GameResult::Lost => Some(format!(
            "GAME OVER! Sorry, you've lost. The word was: {}",
            state.secret_word()
        )),
    }
}

/// Render a round as display lines
///
/// # Examples
/// ```
/// use hangman::core::{GameState, Word};
/// use hangman::output::formatters::{Gallows, render_lines};
///
/// let state = GameState::new(Word::new("Cat").unwrap(), 3);
/// let lines = render_lines(&state, "Animals", &Gallows::classic());
/// assert!(lines.contains(&"Word: _ _ _".to_string()));
/// ```
#[must_use]
pub fn render_lines(state: &GameState, category: &str, gallows: &Gallows) -> Vec<String> {
    let mut lines: Vec<String> = gallows
        .stage(state.wrong_guess_count(), state.max_wrong_guesses())
        .lines()
        .map(ToString::to_string)
        .collect();

    lines.push(String::new());
    lines.push(format!("Category: {category}"));
    lines.push(format!("Word: {}", state.render_word()));
    lines.push(format!(
        "Wrong guesses: {}/{} ({} left)",
        state.wrong_guess_count(),
        state.max_wrong_guesses(),
        state.guesses_left()
    ));

    if !state.missed().is_empty() {
        lines.push(format!("Missed: {}", missed_letters(state)));
    }

    if let Some(message) = result_message(state, state.evaluate()) {
        lines.push(String::new());
        lines.push(message);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn game(word: &str, max: usize) -> GameState {
        GameState::new(Word::new(word).unwrap(), max)
    }

    fn guess(state: &mut GameState, c: char) {
        let _ = state.guess(Letter::new(c).unwrap());
    }

    #[test]
    fn stage_scales_with_limit() {
        let gallows = Gallows::classic();
        assert_eq!(gallows.stage_count(), 10);

        assert_eq!(gallows.stage_index(0, 7), 0);
        assert_eq!(gallows.stage_index(7, 7), 9);
        assert_eq!(gallows.stage_index(9, 10), 8);
        assert_eq!(gallows.stage_index(1, 1), 9);
        assert_eq!(gallows.stage_index(3, 2), 9);
    }

    #[test]
    fn stage_progress_is_monotonic() {
        let gallows = Gallows::classic();
        let indices: Vec<usize> = (0..=4).map(|w| gallows.stage_index(w, 4)).collect();
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn final_stage_has_full_figure() {
        let gallows = Gallows::classic();
        let last = gallows.stage(10, 10);
        assert!(last.contains('O'));
        assert!(last.contains("/ \\"));
    }

    #[test]
    fn empty_custom_stages() {
        let gallows = Gallows::new(Vec::new());
        assert_eq!(gallows.stage(3, 5), "");
    }

    #[test]
    fn render_fresh_round() {
        let state = game("Cat", 3);
        let lines = render_lines(&state, "Animals", &Gallows::classic());

        assert!(lines.contains(&"Category: Animals".to_string()));
        assert!(lines.contains(&"Word: _ _ _".to_string()));
        assert!(lines.contains(&"Wrong guesses: 0/3 (3 left)".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("Missed")));
    }

    #[test]
    fn render_lost_round() {
        let mut state = game("Cat", 2);
        guess(&mut state, 'x');
        guess(&mut state, 'q');

        let lines = render_lines(&state, "Animals", &Gallows::classic());
        assert!(lines.contains(&"Missed: X Q".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "GAME OVER! Sorry, you've lost. The word was: Cat"
        );
    }

    #[test]
    fn render_won_round() {
        let mut state = game("Go", 5);
        guess(&mut state, 'g');
        guess(&mut state, 'o');

        let lines = render_lines(&state, "Misc", &Gallows::classic());
        assert!(lines.contains(&"Word: G o".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "Congratulations, you've won! The word was: Go"
        );
    }

    #[test]
    fn board_marks_hits_and_misses() {
        let mut state = game("Cat", 5);
        guess(&mut state, 'a');
        guess(&mut state, 'z');

        let board = letter_board(&state);
        assert_eq!(board.len(), 26);
        assert_eq!(board[0], ('A', Some(LetterState::Revealed)));
        assert_eq!(board[2], ('C', None));
        assert_eq!(board[25], ('Z', Some(LetterState::Missed)));
    }
}
