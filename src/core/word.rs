//! Secret word representation
//!
//! A `SecretWord` stores the hidden word along with letter position indices used to
//! reveal every occurrence of a guessed letter in one lookup.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// The fixed word the player is trying to guess
///
/// Immutable for the lifetime of a game. Letters are always lowercase ASCII.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<char>,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Secret word must not be empty")]
    Empty,
    #[error("Secret word must contain only ASCII letters")]
    NonAscii,
    #[error("Secret word contains invalid character '{0}'")]
    InvalidCharacter(char),
}

impl SecretWord {
    /// Word used when none is supplied on the command line
    pub const DEFAULT: &'static str = "hangman";

    /// Create a new secret word from a string
    ///
    /// The text is trimmed and normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("HangMan").unwrap();
    /// assert_eq!(word.text(), "hangman");
    /// assert_eq!(word.positions_of('a'), &[1, 5]);
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("hang man").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self::from_validated(text))
    }

    /// Build the position index for text already known to be lowercase ASCII
    fn from_validated(text: String) -> Self {
        let letters: Vec<char> = text.chars().collect();

        // Build position map for fast reveal lookup
        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in letters.iter().enumerate() {
            letter_positions.entry(ch).or_default().push(i);
        }

        Self {
            text,
            letters,
            letter_positions,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Number of distinct letters in the word
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letter_positions.len()
    }
}

impl Default for SecretWord {
    fn default() -> Self {
        Self::from_validated(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for SecretWord {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = SecretWord::new("hangman").unwrap();
        assert_eq!(word.text(), "hangman");
        assert_eq!(word.len(), 7);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = SecretWord::new("HANGMAN").unwrap();
        assert_eq!(word.text(), "hangman");

        let word2 = SecretWord::new("  RuSt ").unwrap();
        assert_eq!(word2.text(), "rust");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(
            SecretWord::new("hang3"),
            Err(WordError::InvalidCharacter('3'))
        );
        assert_eq!(
            SecretWord::new("hang-man"),
            Err(WordError::InvalidCharacter('-'))
        );
        assert_eq!(SecretWord::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = SecretWord::new("hangman").unwrap();
        assert_eq!(word.positions_of('h'), &[0]);
        assert_eq!(word.positions_of('a'), &[1, 5]);
        assert_eq!(word.positions_of('n'), &[2, 6]);
        assert_eq!(word.positions_of('z'), &[] as &[usize]);
    }

    #[test]
    fn word_has_letter() {
        let word = SecretWord::new("hangman").unwrap();
        assert!(word.has_letter('g'));
        assert!(word.has_letter('m'));
        assert!(!word.has_letter('x'));
    }

    #[test]
    fn word_distinct_letters() {
        assert_eq!(SecretWord::new("hangman").unwrap().distinct_letters(), 5);
        assert_eq!(SecretWord::new("aaaa").unwrap().distinct_letters(), 1);
    }

    #[test]
    fn default_matches_constructor() {
        let default = SecretWord::default();
        assert_eq!(default, SecretWord::new(SecretWord::DEFAULT).unwrap());
    }

    #[test]
    fn word_display_and_parse() {
        let word: SecretWord = "Rust".parse().unwrap();
        assert_eq!(format!("{word}"), "rust");
    }
}
