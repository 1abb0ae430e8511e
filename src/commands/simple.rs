//! Simple interactive CLI mode
//!
//! Line-based game without the full-screen interface: one guess per line.

use super::Round;
use crate::core::{GameError, GameResult};
use crate::output::display::print_warning;
use crate::output::{Gallows, print_banner, print_category_menu, print_result, print_round};
use crate::wordlists::WordStore;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// What a line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    /// Exactly one character, to be checked as a letter
    Guess(char),
    Quit,
    /// Anything else: empty, several characters
    Unrecognized(String),
}

/// Interpret one line typed at the guess prompt
///
/// `quit` and `exit` end the game; single letters like `q` are always guesses.
#[must_use]
pub fn parse_line(line: &str) -> LineInput {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
        return LineInput::Quit;
    }

    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => LineInput::Guess(c),
        _ => LineInput::Unrecognized(trimmed.to_string()),
    }
}

/// Interpret the answer to the category menu
///
/// Blank picks a random category; otherwise a 1-based index or a category name.
/// Returns `Err` with a message for anything else.
pub fn parse_category_choice(input: &str, store: &WordStore) -> Result<Option<String>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let count = store.categories().len();
    if let Ok(n) = trimmed.parse::<usize>() {
        return if (1..=count).contains(&n) {
            Ok(Some(store.categories()[n - 1].name.clone()))
        } else {
            Err(format!("Enter a number between 1 and {count}"))
        };
    }

    store
        .category(trimmed)
        .map(|c| Some(c.name.clone()))
        .ok_or_else(|| format!("Unknown category '{trimmed}'"))
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails or if no word can be selected.
pub fn run_simple(
    store: &WordStore,
    category: Option<&str>,
    max_wrong_guesses: usize,
) -> Result<()> {
    let mut rng = rand::rng();
    let gallows = Gallows::classic();

    print_banner();
    println!("Guess the word one letter at a time. Type 'quit' to leave.\n");

    loop {
        let chosen = match category {
            Some(name) => Some(name.to_string()),
            None => choose_category(store)?,
        };

        let mut round = Round::start(store, chosen.as_deref(), max_wrong_guesses, &mut rng)
            .context("Could not start a round")?;
        println!(
            "Getting random challenge from category: {}",
            round.category.blue()
        );

        if !play_round(&mut round, &gallows)? {
            println!("\nThe word was: {}", round.state.secret_word());
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => println!("\n🔄 New round!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Play until the round ends; returns false if the player quit early
fn play_round(round: &mut Round, gallows: &Gallows) -> Result<bool> {
    loop {
        print_round(&round.state, &round.category, gallows);

        let result = round.result();
        if result.is_over() {
            print_result(&round.state, result);
            return Ok(true);
        }

        let input = get_user_input("Guess a letter")?;
        match parse_line(&input) {
            LineInput::Quit => return Ok(false),
            LineInput::Unrecognized(text) if text.is_empty() => {}
            LineInput::Unrecognized(text) => {
                print_warning(&format!("Expected a single letter, got '{text}'"));
            }
            LineInput::Guess(c) => {
                let wrong_before = round.state.wrong_guess_count();
                match round.guess_char(c) {
                    Ok(GameResult::OnGoing) if round.state.wrong_guess_count() > wrong_before => {
                        println!("{}", "Wrong guess.".red());
                    }
                    Ok(GameResult::OnGoing) => println!("{}", "Correct guess!".green()),
                    Ok(_) => {}
                    Err(e @ (GameError::InvalidLetter(_) | GameError::RepeatedGuess(_))) => {
                        print_warning(&e.to_string());
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }
}

fn choose_category(store: &WordStore) -> Result<Option<String>> {
    print_category_menu(store);
    loop {
        let input = get_user_input(&format!(
            "Select a category by number (1-{}, blank for random)",
            store.categories().len()
        ))?;
        match parse_category_choice(&input, store) {
            Ok(choice) => return Ok(choice),
            Err(message) => print_warning(&message),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{} ", format!("{prompt}:").yellow());
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    anyhow::ensure!(read > 0, "Input closed");

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn single_characters_are_guesses() {
        assert_eq!(parse_line("a"), LineInput::Guess('a'));
        assert_eq!(parse_line("  Q \n"), LineInput::Guess('Q'));
        assert_eq!(parse_line("7"), LineInput::Guess('7'));
    }

    #[test]
    fn quit_words() {
        assert_eq!(parse_line("quit"), LineInput::Quit);
        assert_eq!(parse_line("EXIT"), LineInput::Quit);
    }

    #[test]
    fn longer_input_unrecognized() {
        assert_eq!(parse_line("ab"), LineInput::Unrecognized("ab".to_string()));
        assert_eq!(parse_line("   "), LineInput::Unrecognized(String::new()));
    }

    #[test]
    fn category_choice_by_number_and_name() {
        let store = WordStore::parse_str("Animals\nCat\n\nFood\nPie\n\n");

        assert_eq!(parse_category_choice("", &store), Ok(None));
        assert_eq!(
            parse_category_choice("2", &store),
            Ok(Some("Food".to_string()))
        );
        assert_eq!(
            parse_category_choice("animals", &store),
            Ok(Some("Animals".to_string()))
        );
        assert_eq!(
            parse_category_choice("3", &store),
            Err("Enter a number between 1 and 2".to_string())
        );
        assert!(parse_category_choice("Cars", &store).is_err());
    }

    #[test]
    fn menu_number_keeps_case_distinct_categories_apart() {
        let store = WordStore::parse_str("food\nApple\n\nFood\nPizza\n\n");
        let choice = parse_category_choice("2", &store).unwrap();

        let mut rng = StdRng::seed_from_u64(4);
        let round = Round::start(&store, choice.as_deref(), 3, &mut rng).unwrap();
        assert_eq!(round.category, "Food");
        assert_eq!(round.state.secret_word().text(), "Pizza");
    }
}
