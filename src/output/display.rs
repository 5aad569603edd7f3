//! Console display functions for the game loop
//!
//! Every function writes to a caller-supplied writer so the loop can run
//! against stdout or an in-memory buffer.

use super::formatters::{final_message, format_tried, guess_error_notice, turn_feedback};
use crate::core::{Game, GuessError, TurnResult};
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Welcome to Hangman!".bright_cyan().bold())
}

/// Print the revealed word, tried letters, lives and the guess prompt
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_turn_status(out: &mut impl Write, game: &Game) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Word: {}", game.revealed())?;
    writeln!(out, "Tried letters: {}", format_tried(game.tried()))?;
    writeln!(out, "Lives left: {}", game.lives())?;
    write!(out, "Guess a letter: ")?;
    out.flush()
}

/// Print the one-line feedback for a resolved turn
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_feedback(out: &mut impl Write, result: &TurnResult) -> io::Result<()> {
    let Some(text) = turn_feedback(result) else {
        return Ok(());
    };

    match result {
        TurnResult::Correct { .. } => writeln!(out, "{}", text.green()),
        TurnResult::Incorrect { .. } => writeln!(out, "{}", text.red()),
        TurnResult::AlreadyTried(_) | TurnResult::GameOver => writeln!(out, "{}", text.yellow()),
    }
}

/// Print a notice for unusable input, if it deserves one
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_guess_error(out: &mut impl Write, error: &GuessError) -> io::Result<()> {
    match guess_error_notice(error) {
        Some(text) => writeln!(out, "{}", text.yellow()),
        None => Ok(()),
    }
}

/// Print the win or loss message with the secret word
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_final_message(out: &mut impl Write, game: &Game) -> io::Result<()> {
    let message = final_message(game.is_won(), game.secret().text());

    writeln!(out)?;
    if game.is_won() {
        writeln!(out, "{}", message.bright_green().bold())?;
    } else {
        writeln!(out, "{}", message.bright_red().bold())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn turn_status_lists_state() {
        let mut game = Game::new(SecretWord::new("hangman").unwrap());
        game.take_turn('h');
        game.take_turn('x');

        let text = render(|out| write_turn_status(out, &game));

        assert!(text.contains("Word: h______\n"));
        assert!(text.contains("Tried letters: h x\n"));
        assert!(text.contains("Lives left: 5\n"));
        assert!(text.ends_with("Guess a letter: "));
    }

    #[test]
    fn feedback_for_each_outcome() {
        let good = render(|out| {
            write_feedback(
                out,
                &TurnResult::Correct {
                    letter: 'a',
                    revealed: 1,
                },
            )
        });
        assert!(good.contains("Good guess!"));

        let bad = render(|out| {
            write_feedback(
                out,
                &TurnResult::Incorrect {
                    letter: 'z',
                    lives_left: 3,
                },
            )
        });
        assert!(bad.contains("Wrong guess!"));

        let repeat = render(|out| write_feedback(out, &TurnResult::AlreadyTried('q')));
        assert!(repeat.contains("You already tried 'q'."));

        assert!(render(|out| write_feedback(out, &TurnResult::GameOver)).is_empty());
    }

    #[test]
    fn blank_input_prints_nothing() {
        assert!(render(|out| write_guess_error(out, &GuessError::Empty)).is_empty());
        assert!(
            render(|out| write_guess_error(out, &GuessError::NotALetter('4')))
                .contains("Please enter a letter.")
        );
    }

    #[test]
    fn final_message_on_loss_discloses_word() {
        let game = Game::with_lives(SecretWord::new("rust").unwrap(), 0);
        let text = render(|out| write_final_message(out, &game));
        assert!(text.contains("Game over! The word was: rust"));
    }
}
