//! Core domain types for Hangman
//!
//! This module contains the game rules with no I/O of their own.
//! All types here are pure, testable, and shared by every front end.

mod game;
mod guess;
mod word;

pub use game::{Game, GameStatus, PLACEHOLDER, TurnResult};
pub use guess::{GuessError, parse_guess};
pub use word::{SecretWord, WordError};
