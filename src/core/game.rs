//! Hangman game state and turn resolution
//!
//! `Game` owns everything a session needs: the secret word, the revealed pattern,
//! the letters tried so far and the remaining lives. Front ends feed it one letter
//! at a time through [`Game::take_turn`] and render whatever it reports back.

use super::SecretWord;
use std::fmt;
use tracing::{debug, info};

/// Placeholder shown for letters not yet revealed
pub const PLACEHOLDER: char = '_';

/// Where a game stands after the most recent turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True for both terminal states
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Outcome of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Letter was guessed before; nothing changed and no life was spent
    AlreadyTried(char),
    /// Letter is in the word; `revealed` positions were uncovered
    Correct { letter: char, revealed: usize },
    /// Letter is not in the word; one life was spent
    Incorrect { letter: char, lives_left: u32 },
    /// The game had already finished; the guess was ignored
    GameOver,
}

/// A single game of Hangman
///
/// Invariants held after every turn:
/// - `revealed().len() == secret().len()`
/// - every non-placeholder in the revealed pattern matches the secret at that position
/// - tried letters contain no duplicates and keep guess order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    secret: SecretWord,
    revealed: Vec<char>,
    tried: Vec<char>,
    lives: u32,
    starting_lives: u32,
}

impl Game {
    /// Lives a new game starts with
    pub const DEFAULT_LIVES: u32 = 6;

    /// Start a new game with [`Game::DEFAULT_LIVES`] lives
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Game, GameStatus, SecretWord, TurnResult};
    ///
    /// let mut game = Game::new(SecretWord::new("hangman").unwrap());
    /// assert_eq!(game.revealed(), "_______");
    ///
    /// assert_eq!(game.take_turn('a'), TurnResult::Correct { letter: 'a', revealed: 2 });
    /// assert_eq!(game.revealed(), "_a___a_");
    ///
    /// assert_eq!(game.take_turn('z'), TurnResult::Incorrect { letter: 'z', lives_left: 5 });
    /// assert_eq!(game.status(), GameStatus::Playing);
    /// ```
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        Self::with_lives(secret, Self::DEFAULT_LIVES)
    }

    /// Start a new game with a custom number of lives
    #[must_use]
    pub fn with_lives(secret: SecretWord, lives: u32) -> Self {
        let revealed = vec![PLACEHOLDER; secret.len()];
        info!(length = secret.len(), lives, "New game started");

        Self {
            secret,
            revealed,
            tried: Vec::new(),
            lives,
            starting_lives: lives,
        }
    }

    /// Resolve one guess
    ///
    /// The letter is normalized to lowercase. Repeated letters and guesses made
    /// after the game has ended leave the state untouched.
    pub fn take_turn(&mut self, letter: char) -> TurnResult {
        let letter = letter.to_ascii_lowercase();

        if self.is_over() {
            debug!(%letter, "Guess ignored, game already over");
            return TurnResult::GameOver;
        }

        if self.has_tried(letter) {
            debug!(%letter, "Letter already tried");
            return TurnResult::AlreadyTried(letter);
        }

        self.tried.push(letter);

        let positions = self.secret.positions_of(letter);
        for &i in positions {
            self.revealed[i] = letter;
        }

        let result = if positions.is_empty() {
            self.lives = self.lives.saturating_sub(1);
            TurnResult::Incorrect {
                letter,
                lives_left: self.lives,
            }
        } else {
            TurnResult::Correct {
                letter,
                revealed: positions.len(),
            }
        };

        debug!(%letter, ?result, lives = self.lives, pattern = %self.revealed(), "Turn resolved");

        match self.status() {
            GameStatus::Won => info!(lives = self.lives, guesses = self.tried.len(), "Game won"),
            GameStatus::Lost => info!(guesses = self.tried.len(), "Game lost"),
            GameStatus::Playing => {}
        }

        result
    }

    /// Current state of the game
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.revealed.as_slice() == self.secret.letters() {
            GameStatus::Won
        } else if self.lives == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status() == GameStatus::Won
    }

    #[inline]
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.status() == GameStatus::Lost
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Revealed pattern as a string, e.g. `"_a___a_"`
    #[must_use]
    pub fn revealed(&self) -> String {
        self.revealed.iter().collect()
    }

    /// Revealed pattern one character per position
    #[inline]
    #[must_use]
    pub fn revealed_letters(&self) -> &[char] {
        &self.revealed
    }

    /// Letters tried so far, in guess order
    #[inline]
    #[must_use]
    pub fn tried(&self) -> &[char] {
        &self.tried
    }

    /// Whether a letter has already been guessed
    #[inline]
    #[must_use]
    pub fn has_tried(&self, letter: char) -> bool {
        self.tried.contains(&letter.to_ascii_lowercase())
    }

    /// Lives remaining
    #[inline]
    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    /// Lives the game started with
    #[inline]
    #[must_use]
    pub const fn starting_lives(&self) -> u32 {
        self.starting_lives
    }

    /// Number of incorrect guesses made so far
    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u32 {
        self.starting_lives - self.lives
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(SecretWord::default())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} lives left)", self.revealed(), self.lives)
    }
}
