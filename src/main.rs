//! Hangman - CLI
//!
//! Console word-guessing game with a line-based mode and a full-screen TUI mode.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use hangman::{
    commands::run_simple_stdio,
    core::{Game, SecretWord},
    interactive::{App, run_tui},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before you run out of lives",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Secret word to guess (letters only)
    #[arg(short, long, global = true, default_value = SecretWord::DEFAULT)]
    word: SecretWord,

    /// Disable colored output in simple mode
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple CLI mode (default - one guess per line)
    Simple,

    /// Interactive TUI mode
    Play {
        /// Write logs to this file (logging is off in TUI mode otherwise)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => {
            init_logging(cli.verbose);
            run_simple_command(cli.word)
        }
        Commands::Play { log_file } => {
            if let Some(path) = &log_file {
                init_file_logging(cli.verbose, path)?;
            }
            run_play_command(cli.word)
        }
    }
}

fn env_filter(verbose: u8) -> EnvFilter {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr so diagnostics never mix with the game on stdout
fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .init();
}

/// Log to a file to avoid interfering with the TUI
fn init_file_logging(verbose: u8, path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run_simple_command(secret: SecretWord) -> Result<()> {
    info!(length = secret.len(), "Starting simple mode");

    let mut game = Game::new(secret);
    let status = run_simple_stdio(&mut game)?;

    info!(?status, lives = game.lives(), "Game finished");
    Ok(())
}

fn run_play_command(secret: SecretWord) -> Result<()> {
    info!(length = secret.len(), "Starting TUI mode");

    let app = App::new(secret);
    run_tui(app)
}
