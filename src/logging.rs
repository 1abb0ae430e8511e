//! Tracing subscriber setup

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Map `-v` repetitions onto a maximum level; warnings are always shown
#[must_use]
pub const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global fmt subscriber
///
/// Logs go to `log_file` when given, otherwise to stderr. The full-screen mode
/// should always be paired with a log file, or output will tear the display.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let level = level_for(verbosity);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Could not create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}
