//! Colored terminal printing for the line-mode game

use super::formatters::{Gallows, missed_letters, result_message};
use crate::core::{GameResult, GameState};
use crate::wordlists::WordStore;
use colored::Colorize;

/// Print the game banner
pub fn print_banner() {
    println!("\n{}", "═".repeat(40).cyan());
    println!("{}", "            H A N G M A N".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());
}

/// Print the numbered category menu
pub fn print_category_menu(store: &WordStore) {
    println!("\n{}", "Categories:".bright_cyan().bold());
    for (i, category) in store.categories().iter().enumerate() {
        println!(
            "  {}.) {} {}",
            i + 1,
            category.name.blue(),
            format!("({} words)", category.words.len()).bright_black()
        );
    }
}

/// Print the current state of a round
pub fn print_round(state: &GameState, category: &str, gallows: &Gallows) {
    println!();
    for line in gallows
        .stage(state.wrong_guess_count(), state.max_wrong_guesses())
        .lines()
    {
        println!("{line}");
    }

    println!("\nCategory: {}", category.blue());
    println!("Word: {}", colored_word(state));

    let left = state.guesses_left();
    let left_text = format!("{left} left");
    println!(
        "Wrong guesses: {}/{} ({})",
        state.wrong_guess_count(),
        state.max_wrong_guesses(),
        if left <= 2 {
            left_text.red().bold()
        } else {
            left_text.yellow()
        }
    );

    if !state.missed().is_empty() {
        println!("Missed: {}", missed_letters(state).red());
    }
}

/// Print the end-of-round message
pub fn print_result(state: &GameState, result: GameResult) {
    let Some(message) = result_message(state, result) else {
        return;
    };

    println!();
    match result {
        GameResult::Won => println!("{}", message.green().bold()),
        GameResult::Lost => println!("{}", message.red().bold()),
        GameResult::OnGoing => {}
    }
}

/// Print a recoverable input problem
pub fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

fn colored_word(state: &GameState) -> String {
    // Revealed letters are green, placeholders stay plain
    state
        .render_word()
        .split(' ')
        .map(|token| {
            if !token.is_empty() && token.chars().all(char::is_alphabetic) {
                token.green().bold().to_string()
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
