//! Hangman
//!
//! A console word-guessing game: reveal the secret word one letter at a time before
//! running out of lives.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, SecretWord, TurnResult};
//!
//! let mut game = Game::new(SecretWord::new("hangman").unwrap());
//!
//! match game.take_turn('n') {
//!     TurnResult::Correct { revealed, .. } => println!("Revealed {revealed} letters"),
//!     other => println!("{other:?}"),
//! }
//! assert_eq!(game.revealed(), "__n___n");
//! ```

// Core domain types
pub mod core;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
