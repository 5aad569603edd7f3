//! Formatting utilities shared by the console and TUI front ends

use crate::core::{GuessError, TurnResult};

/// Gallows drawings indexed by stage (0 = empty, 6 = fully hanged)
const GALLOWS: [[&str; 7]; 7] = [
    [
        "  +---+", "  |   |", "      |", "      |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", "      |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", "  |   |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|   |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "      |", "=========",
    ],
];

/// Format tried letters as a space-separated list in guess order
#[must_use]
pub fn format_tried(tried: &[char]) -> String {
    let mut result = String::with_capacity(tried.len() * 2);
    for (i, &letter) in tried.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(letter);
    }
    result
}

/// Spread a revealed pattern out for large display, e.g. `h _ n`
#[must_use]
pub fn spaced_pattern(revealed: &[char]) -> String {
    format_tried(revealed).to_uppercase()
}

/// Lives as a row of full and empty hearts
#[must_use]
pub fn lives_hearts(lives: u32, starting_lives: u32) -> String {
    let lost = starting_lives.saturating_sub(lives);
    format!(
        "{}{}",
        "♥".repeat(lives as usize),
        "♡".repeat(lost as usize)
    )
}

/// ASCII gallows for the given number of wrong guesses
///
/// Scales to any number of starting lives so the figure is complete exactly
/// when the last life is lost.
#[must_use]
pub fn gallows(wrong_guesses: u32, starting_lives: u32) -> &'static [&'static str] {
    let last = GALLOWS.len() - 1;
    let stage = if starting_lives == 0 {
        last
    } else {
        ((wrong_guesses as usize * last).div_ceil(starting_lives as usize)).min(last)
    };
    &GALLOWS[stage]
}

/// One-line feedback for a resolved turn
///
/// Returns `None` when there is nothing to tell the player.
#[must_use]
pub fn turn_feedback(result: &TurnResult) -> Option<String> {
    match result {
        TurnResult::Correct { .. } => Some("Good guess!".to_string()),
        TurnResult::Incorrect { .. } => Some("Wrong guess!".to_string()),
        TurnResult::AlreadyTried(letter) => Some(format!("You already tried '{letter}'.")),
        TurnResult::GameOver => None,
    }
}

/// One-line notice for input that could not be used as a guess
#[must_use]
pub fn guess_error_notice(error: &GuessError) -> Option<String> {
    match error {
        GuessError::Empty => None,
        GuessError::NotALetter(_) => Some("Please enter a letter.".to_string()),
    }
}

/// Final message announcing the result and disclosing the secret word
#[must_use]
pub fn final_message(won: bool, secret: &str) -> String {
    if won {
        format!("Congratulations! You guessed the word: {secret}")
    } else {
        format!("Game over! The word was: {secret}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tried_letters_space_separated() {
        assert_eq!(format_tried(&['h', 'a', 'x']), "h a x");
        assert_eq!(format_tried(&[]), "");
    }

    #[test]
    fn spaced_pattern_uppercases() {
        assert_eq!(spaced_pattern(&['h', '_', 'n']), "H _ N");
    }

    #[test]
    fn hearts_full_and_empty() {
        assert_eq!(lives_hearts(6, 6), "♥♥♥♥♥♥");
        assert_eq!(lives_hearts(4, 6), "♥♥♥♥♡♡");
        assert_eq!(lives_hearts(0, 6), "♡♡♡♡♡♡");
    }

    #[test]
    fn gallows_empty_at_start() {
        let art = gallows(0, 6);
        assert!(!art.iter().any(|line| line.contains('O')));
    }

    #[test]
    fn gallows_complete_when_out_of_lives() {
        assert_eq!(gallows(6, 6), &GALLOWS[6]);
        assert_eq!(gallows(3, 3), &GALLOWS[6]);
        assert_eq!(gallows(0, 0), &GALLOWS[6]);
    }

    #[test]
    fn gallows_scales_with_lives() {
        // One of three lives lost draws two of six stages
        assert_eq!(gallows(1, 3), &GALLOWS[2]);
        assert_eq!(gallows(2, 6), &GALLOWS[2]);
    }

    #[test]
    fn feedback_messages() {
        assert_eq!(
            turn_feedback(&TurnResult::Correct {
                letter: 'a',
                revealed: 2
            })
            .as_deref(),
            Some("Good guess!")
        );
        assert_eq!(
            turn_feedback(&TurnResult::Incorrect {
                letter: 'x',
                lives_left: 5
            })
            .as_deref(),
            Some("Wrong guess!")
        );
        assert_eq!(
            turn_feedback(&TurnResult::AlreadyTried('h')).as_deref(),
            Some("You already tried 'h'.")
        );
        assert_eq!(turn_feedback(&TurnResult::GameOver), None);
    }

    #[test]
    fn guess_error_notices() {
        assert_eq!(guess_error_notice(&GuessError::Empty), None);
        assert_eq!(
            guess_error_notice(&GuessError::NotALetter('3')).as_deref(),
            Some("Please enter a letter.")
        );
    }

    #[test]
    fn final_messages_disclose_secret() {
        assert_eq!(
            final_message(true, "hangman"),
            "Congratulations! You guessed the word: hangman"
        );
        assert_eq!(
            final_message(false, "hangman"),
            "Game over! The word was: hangman"
        );
    }
}
