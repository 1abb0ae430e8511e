//! Hangman - CLI
//!
//! Full-screen and line-mode hangman over categorized word lists.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{print_categories, run_simple},
    config::{Difficulty, GameConfig, Overrides, Settings},
    core::GameError,
    logging,
    wordlists::WordStore,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file: records of category name, words joined by ": ", blank line
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// JSON settings file (guessLimit, wordFile, categories)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Difficulty: easy (10 misses), normal (7, default), hard (4)
    #[arg(short, long, global = true)]
    difficulty: Option<String>,

    /// Wrong guesses allowed; overrides difficulty
    #[arg(short = 'm', long, global = true)]
    max_wrong: Option<usize>,

    /// Play only words from this category
    #[arg(long, global = true)]
    category: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen interactive mode (default)
    Play,

    /// Simple line mode (type one letter per line)
    Simple,

    /// List the available categories
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Could not load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let overrides = Overrides {
        words: cli.words,
        difficulty: cli.difficulty.as_deref().map(Difficulty::from_name),
        max_wrong: cli.max_wrong,
        category: cli.category,
    };
    let config = GameConfig::resolve(settings, overrides)?;
    info!(
        source = ?config.word_source,
        max_wrong_guesses = config.max_wrong_guesses,
        "configuration resolved"
    );

    let store = config
        .word_source
        .load()
        .context("Could not load word list")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Categories => {
            print_categories(&store);
            Ok(())
        }
        Commands::Simple => {
            check_store(&store, config.category.as_deref())?;
            run_simple(&store, config.category.as_deref(), config.max_wrong_guesses)
        }
        Commands::Play => {
            check_store(&store, config.category.as_deref())?;
            run_play_command(&store, &config)
        }
    }
}

/// Fail before any round starts if there is nothing to play
fn check_store(store: &WordStore, category: Option<&str>) -> Result<()> {
    if store.is_empty() {
        bail!(GameError::EmptyWordPool(None));
    }
    if let Some(name) = category
        && store.category(name).is_none_or(|c| c.words.is_empty())
    {
        bail!(GameError::EmptyWordPool(Some(name.to_string())));
    }
    Ok(())
}

fn run_play_command(store: &WordStore, config: &GameConfig) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(store, config.max_wrong_guesses, config.category.clone());
    run_tui(app)
}
