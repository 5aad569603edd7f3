//! Player input normalization
//!
//! Turns a raw line of input into a single lowercase guess letter.

use thiserror::Error;

/// Reasons a line of input could not be used as a guess
///
/// None of these cost the player a life; the front end simply re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("No letter entered")]
    Empty,
    #[error("'{0}' is not a letter")]
    NotALetter(char),
}

/// Parse a guess from one line of player input
///
/// Surrounding whitespace is ignored and only the first character of the
/// remaining token is meaningful. The letter is normalized to lowercase.
///
/// # Errors
/// Returns `GuessError::Empty` for blank input and `GuessError::NotALetter`
/// when the first character is not an ASCII letter.
///
/// # Examples
/// ```
/// use hangman::core::{GuessError, parse_guess};
///
/// assert_eq!(parse_guess("  H\n"), Ok('h'));
/// assert_eq!(parse_guess("abc"), Ok('a'));
/// assert_eq!(parse_guess("7"), Err(GuessError::NotALetter('7')));
/// ```
pub fn parse_guess(input: &str) -> Result<char, GuessError> {
    let first = input.trim().chars().next().ok_or(GuessError::Empty)?;

    if first.is_ascii_alphabetic() {
        Ok(first.to_ascii_lowercase())
    } else {
        Err(GuessError::NotALetter(first))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lowercase_letter() {
        assert_eq!(parse_guess("g"), Ok('g'));
    }

    #[test]
    fn parse_uppercase_normalized() {
        assert_eq!(parse_guess("G"), Ok('g'));
        assert_eq!(parse_guess("Zebra"), Ok('z'));
    }

    #[test]
    fn parse_ignores_surrounding_whitespace() {
        assert_eq!(parse_guess("\t  m  \r\n"), Ok('m'));
    }

    #[test]
    fn parse_only_first_character_counts() {
        assert_eq!(parse_guess("xyz"), Ok('x'));
        assert_eq!(parse_guess("a 1"), Ok('a'));
    }

    #[test]
    fn parse_blank_is_empty() {
        assert_eq!(parse_guess(""), Err(GuessError::Empty));
        assert_eq!(parse_guess("   \n"), Err(GuessError::Empty));
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(parse_guess("1"), Err(GuessError::NotALetter('1')));
        assert_eq!(parse_guess("?"), Err(GuessError::NotALetter('?')));
        assert_eq!(parse_guess("é"), Err(GuessError::NotALetter('é')));
    }
}
