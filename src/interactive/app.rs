//! TUI application state and logic

use crate::commands::Round;
use crate::core::{GameError, GameResult};
use crate::output::Gallows;
use crate::output::formatters::result_message;
use crate::wordlists::WordStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

/// Application state
pub struct App<'a> {
    pub store: &'a WordStore,
    pub max_wrong_guesses: usize,
    pub forced_category: Option<String>,
    pub round: Option<Round>,
    pub input_mode: InputMode,
    /// Cursor in the category menu; 0 is "Random", n is category n-1
    pub selected: usize,
    pub messages: Vec<Message>,
    pub gallows: Gallows,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    CategorySelect,
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        store: &'a WordStore,
        max_wrong_guesses: usize,
        forced_category: Option<String>,
    ) -> Self {
        Self::with_rng(store, max_wrong_guesses, forced_category, StdRng::from_os_rng())
    }

    /// Create the app with a given random source
    #[must_use]
    pub fn with_rng(
        store: &'a WordStore,
        max_wrong_guesses: usize,
        forced_category: Option<String>,
        rng: StdRng,
    ) -> Self {
        let mut app = Self {
            store,
            max_wrong_guesses,
            forced_category,
            round: None,
            input_mode: InputMode::CategorySelect,
            selected: 0,
            messages: Vec::new(),
            gallows: Gallows::classic(),
            should_quit: false,
            rng,
        };

        if let Some(category) = app.forced_category.clone() {
            app.start_round(Some(category.as_str()));
        } else {
            app.add_message("Pick a category to receive a random challenge", MessageStyle::Info);
        }
        app
    }

    /// Number of entries in the category menu, including "Random"
    #[must_use]
    pub fn menu_len(&self) -> usize {
        self.store.categories().len() + 1
    }

    pub fn start_round(&mut self, category: Option<&str>) {
        match Round::start(self.store, category, self.max_wrong_guesses, &mut self.rng) {
            Ok(round) => {
                let text = format!("Getting random challenge from category: {}", round.category);
                self.round = Some(round);
                self.input_mode = InputMode::Guessing;
                self.messages.clear();
                self.add_message(&text, MessageStyle::Info);
                self.add_message("Type a letter to guess", MessageStyle::Info);
            }
            Err(e) => {
                error!(error = %e, "could not start round");
                self.round = None;
                self.input_mode = InputMode::CategorySelect;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Start a round from the highlighted menu entry
    pub fn start_selected(&mut self) {
        let category = self
            .selected
            .checked_sub(1)
            .and_then(|i| self.store.categories().get(i))
            .map(|c| c.name.clone());
        self.start_round(category.as_deref());
    }

    pub fn guess(&mut self, c: char) {
        let Some(round) = self.round.as_mut() else {
            return;
        };

        let wrong_before = round.state.wrong_guess_count();
        match round.guess_char(c) {
            Ok(GameResult::OnGoing) => {
                if round.state.wrong_guess_count() > wrong_before {
                    let text = format!("Sorry, '{}' is not in the word", c.to_uppercase());
                    self.add_message(&text, MessageStyle::Error);
                } else {
                    let text = format!("Good guess! '{}' is in the word", c.to_uppercase());
                    self.add_message(&text, MessageStyle::Success);
                }
            }
            Ok(result) => self.finish_round(result),
            Err(e @ (GameError::InvalidLetter(_) | GameError::RepeatedGuess(_))) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            Err(e) => {
                error!(error = %e, "unexpected guess error");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_round(&mut self, result: GameResult) {
        self.input_mode = InputMode::RoundOver;

        let Some(round) = self.round.as_ref() else {
            return;
        };
        let style = if result == GameResult::Won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        if let Some(text) = result_message(&round.state, result) {
            self.add_message(&text, style);
        }
        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
    }

    /// Go to the next round: straight in when a category is forced, else via the menu
    pub fn new_round(&mut self) {
        if let Some(category) = self.forced_category.clone() {
            self.start_round(Some(category.as_str()));
        } else {
            self.round = None;
            self.input_mode = InputMode::CategorySelect;
            self.messages.clear();
            self.add_message("Pick a category to receive a random challenge", MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::CategorySelect => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Up => {
                    self.selected = self.selected.checked_sub(1).unwrap_or(self.menu_len() - 1);
                }
                KeyCode::Down => self.selected = (self.selected + 1) % self.menu_len(),
                KeyCode::Char('r') => self.start_round(None),
                KeyCode::Enter => self.start_selected(),
                _ => {}
            },
            InputMode::Guessing => {
                if let KeyCode::Char(c) = key.code {
                    self.guess(c);
                }
            }
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_round(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            info!("quit requested");
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> WordStore {
        WordStore::parse_str("Animals\nCat\n\nFood\nPie\n\n")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app<'a>(store: &'a WordStore, category: Option<&str>) -> App<'a> {
        App::with_rng(store, 2, category.map(str::to_string), StdRng::seed_from_u64(5))
    }

    #[test]
    fn starts_in_category_menu() {
        let store = store();
        let app = app(&store, None);
        assert_eq!(app.input_mode, InputMode::CategorySelect);
        assert!(app.round.is_none());
        assert_eq!(app.menu_len(), 3);
    }

    #[test]
    fn forced_category_starts_round() {
        let store = store();
        let app = app(&store, Some("Food"));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.round.as_ref().unwrap().category, "Food");
    }

    #[test]
    fn menu_navigation_wraps() {
        let store = store();
        let mut app = app(&store, None);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 2);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn enter_starts_selected_category() {
        let store = store();
        let mut app = app(&store, None);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Guessing);
        let round = app.round.as_ref().unwrap();
        assert_eq!(round.category, "Animals");
        assert_eq!(round.state.secret_word().text(), "Cat");
    }

    #[test]
    fn menu_entry_keeps_case_distinct_categories_apart() {
        let store = WordStore::parse_str("food\nApple\n\nFood\nPizza\n\n");
        let mut app = app(&store, None);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        let round = app.round.as_ref().unwrap();
        assert_eq!(round.category, "Food");
        assert_eq!(round.state.secret_word().text(), "Pizza");
    }

    #[test]
    fn winning_round_by_keys() {
        let store = store();
        let mut app = app(&store, Some("Animals"));

        for c in ['c', 'a', 't'] {
            press(&mut app, KeyCode::Char(c));
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.round.as_ref().unwrap().result(), GameResult::Won);
        let announced_win =
            |m: &Message| m.style == MessageStyle::Success && m.text.contains("The word was: Cat");
        assert!(app.messages.iter().any(announced_win));
    }

    #[test]
    fn q_is_a_guess_while_playing() {
        let store = store();
        let mut app = app(&store, Some("Animals"));

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.round.as_ref().unwrap().state.wrong_guess_count(), 1);
    }

    #[test]
    fn invalid_and_repeated_keys_are_free() {
        let store = store();
        let mut app = app(&store, Some("Animals"));

        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('X'));

        let round = app.round.as_ref().unwrap();
        assert_eq!(round.state.wrong_guess_count(), 1);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn losing_then_new_round_returns_to_menu() {
        let store = store();
        let mut app = app(&store, None);
        press(&mut app, KeyCode::Char('r'));

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.round.as_ref().unwrap().result(), GameResult::Lost);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::CategorySelect);
        assert!(app.round.is_none());
    }

    #[test]
    fn empty_store_reports_error() {
        let store = WordStore::default();
        let mut app = app(&store, None);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::CategorySelect);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn ctrl_c_and_esc_quit() {
        let store = store();
        let mut app = app(&store, Some("Animals"));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = self::app(&store, None);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
