//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterState;
use crate::output::formatters::{letter_board, missed_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Main content
            Constraint::Length(3),  // Letter board
            Constraint::Length(7),  // Messages
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.input_mode {
        InputMode::CategorySelect => render_category_menu(f, app, chunks[1]),
        InputMode::Guessing | InputMode::RoundOver => render_round(f, app, chunks[1]),
    }

    render_letter_board(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_category_menu(f: &mut Frame, app: &App, area: Rect) {
    let entries = std::iter::once(("Random".to_string(), None)).chain(
        app.store
            .categories()
            .iter()
            .map(|c| (c.name.clone(), Some(c.words.len()))),
    );

    let items: Vec<ListItem> = entries
        .enumerate()
        .map(|(i, (name, count))| {
            let label = match count {
                Some(n) => format!("{name} ({n} words)"),
                None => name,
            };
            if i == app.selected {
                ListItem::new(format!("> {label}")).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {label}"))
            }
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .title(" Pick a Category ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_round(f: &mut Frame, app: &App, area: Rect) {
    let Some(round) = app.round.as_ref() else {
        return;
    };
    let state = &round.state;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Gallows
            Constraint::Min(20),    // Word and progress
        ])
        .split(area);

    let drawing: Vec<Line> = app
        .gallows
        .stage(state.wrong_guess_count(), state.max_wrong_guesses())
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    let gallows = Paragraph::new(drawing).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(gallows, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(chunks[1]);

    let mut content = vec![
        Line::from(vec![
            Span::raw("Category: "),
            Span::styled(round.category.clone(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            state.render_word(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Letters: {}/{} revealed",
            state.revealed_letter_count(),
            state.unique_letter_count()
        )),
    ];
    if !state.missed().is_empty() {
        content.push(Line::from(vec![
            Span::raw("Missed:  "),
            Span::styled(missed_letters(state), Style::default().fg(Color::Red)),
        ]));
    }

    let word = Paragraph::new(content).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(word, right[0]);

    let left = state.guesses_left();
    let ratio = left as f64 / state.max_wrong_guesses() as f64;
    let color = if left <= 2 { Color::Red } else { Color::Green };
    let gauge = Gauge::default()
        .block(Block::default().title(" Guesses Left ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{left}/{}", state.max_wrong_guesses()));
    f.render_widget(gauge, right[1]);
}

fn render_letter_board(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = match app.round.as_ref() {
        Some(round) => letter_board(&round.state)
            .into_iter()
            .map(|(c, status)| {
                let style = match status {
                    Some(LetterState::Revealed) => Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                    Some(LetterState::Missed) => Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::CROSSED_OUT),
                    _ => Style::default().fg(Color::White),
                };
                Span::styled(format!("{c} "), style)
            })
            .collect(),
        None => vec![Span::raw("")],
    };

    let board = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::CategorySelect => "↑/↓: Select | Enter: Start | r: Random | q/Esc: Quit",
        InputMode::Guessing => "A-Z: Guess | Esc/Ctrl-C: Quit",
        InputMode::RoundOver => "n/Enter: New Round | q/Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
