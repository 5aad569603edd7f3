//! Simple interactive CLI mode
//!
//! Line-based game loop: show the board, read a guess, report, repeat.

use crate::core::{Game, GameStatus, parse_guess};
use crate::output::{
    write_feedback, write_final_message, write_guess_error, write_turn_status, write_welcome,
};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that stop the console loop before the game finishes
#[derive(Debug, Error)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Input closed before the game finished")]
    InputClosed,
}

/// Run the simple interactive CLI mode until the game is won or lost
///
/// Reads one guess per line from `input` and writes the board, feedback and
/// final message to `output`. Blank lines and non-letters re-prompt without
/// costing a life.
///
/// # Errors
///
/// Returns `GameError::InputClosed` if `input` reaches end-of-file while the
/// game is still in progress, or `GameError::Io` on any read/write failure.
///
/// # Examples
/// ```
/// use hangman::commands::run_simple;
/// use hangman::core::{Game, GameStatus, SecretWord};
/// use std::io::Cursor;
///
/// let mut game = Game::new(SecretWord::new("hangman").unwrap());
/// let mut input = Cursor::new("h\na\nn\ng\nm\n");
/// let mut output = Vec::new();
///
/// let status = run_simple(&mut game, &mut input, &mut output).unwrap();
/// assert_eq!(status, GameStatus::Won);
/// ```
pub fn run_simple(
    game: &mut Game,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<GameStatus, GameError> {
    write_welcome(output)?;

    while !game.is_over() {
        write_turn_status(output, game)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            warn!(pattern = %game.revealed(), lives = game.lives(), "Input closed mid-game");
            writeln!(output)?;
            return Err(GameError::InputClosed);
        }

        match parse_guess(&line) {
            Ok(letter) => {
                let result = game.take_turn(letter);
                write_feedback(output, &result)?;
            }
            Err(err) => {
                debug!(input = line.trim(), %err, "Rejected guess");
                write_guess_error(output, &err)?;
            }
        }
    }

    write_final_message(output, game)?;
    Ok(game.status())
}

/// Play one game on the process's standard input and output
///
/// # Errors
///
/// Same as [`run_simple`].
pub fn run_simple_stdio(game: &mut Game) -> Result<GameStatus, GameError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple(game, &mut stdin.lock(), &mut stdout.lock())
}
