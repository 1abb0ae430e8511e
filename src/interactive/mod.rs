//! Interactive full-screen game
//!
//! Raw-mode keypress loop on top of crossterm, drawn with ratatui.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
pub use rendering::ui;
