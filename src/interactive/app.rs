//! TUI application state and logic

use crate::core::{Game, GameStatus, SecretWord, TurnResult, parse_guess};
use crate::output::formatters::{final_message, guess_error_notice, turn_feedback};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Application state
pub struct App {
    pub secret: SecretWord,
    pub game: Game,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session scoreboard
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        let game = Game::new(secret.clone());

        Self {
            secret,
            game,
            messages: vec![Message {
                text: "Welcome to Hangman! Type a letter to guess.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Feed one key press to the game as a guess
    pub fn handle_guess(&mut self, key: char) {
        let letter = match parse_guess(&key.to_string()) {
            Ok(letter) => letter,
            Err(err) => {
                if let Some(notice) = guess_error_notice(&err) {
                    self.add_message(&notice, MessageStyle::Error);
                }
                return;
            }
        };

        let result = self.game.take_turn(letter);
        if let Some(text) = turn_feedback(&result) {
            let style = match result {
                TurnResult::Correct { .. } => MessageStyle::Success,
                TurnResult::Incorrect { .. } => MessageStyle::Error,
                TurnResult::AlreadyTried(_) | TurnResult::GameOver => MessageStyle::Info,
            };
            self.add_message(&text, style);
        }

        if self.game.is_over() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        let won = self.game.status() == GameStatus::Won;

        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
        }
        self.input_mode = InputMode::GameOver;

        let style = if won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add_message(&final_message(won, self.secret.text()), style);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);

        info!(
            games = self.stats.total_games,
            won = self.stats.games_won,
            "Session scoreboard updated"
        );
    }

    pub fn new_game(&mut self) {
        self.game = Game::new(self.secret.clone());
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! Type a letter to guess.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => match app.input_mode {
                    InputMode::GameOver => match c {
                        'q' => app.should_quit = true,
                        'n' => app.new_game(),
                        _ => {
                            // Game finished, ignore other keys
                        }
                    },
                    InputMode::Guessing => app.handle_guess(c),
                },
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(SecretWord::new("hangman").unwrap())
    }

    #[test]
    fn guesses_update_game_and_messages() {
        let mut app = app();
        app.handle_guess('H');

        assert_eq!(app.game.revealed(), "h______");
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Good guess!");
        assert_eq!(last.style, MessageStyle::Success);
    }

    #[test]
    fn non_letter_keys_rejected() {
        let mut app = app();
        app.handle_guess('5');

        assert!(app.game.tried().is_empty());
        assert_eq!(app.messages.last().unwrap().text, "Please enter a letter.");
    }

    #[test]
    fn repeated_key_reported() {
        let mut app = app();
        app.handle_guess('x');
        app.handle_guess('x');

        assert_eq!(app.game.lives(), 5);
        assert_eq!(app.messages.last().unwrap().text, "You already tried 'x'.");
    }

    #[test]
    fn win_records_stats_and_switches_mode() {
        let mut app = app();
        for c in "hangm".chars() {
            app.handle_guess(c);
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(
            app.stats,
            Statistics {
                total_games: 1,
                games_won: 1
            }
        );
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Congratulations! You guessed the word: hangman")
        );
    }

    #[test]
    fn loss_then_new_game_keeps_scoreboard() {
        let mut app = app();
        for c in "xyzwkq".chars() {
            app.handle_guess(c);
        }
        assert!(app.game.is_lost());
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Game over! The word was: hangman")
        );

        app.new_game();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.lives(), 6);
        assert_eq!(app.game.revealed(), "_______");
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!((app.stats.win_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app();
        for c in "abcdefg".chars() {
            app.handle_guess(c);
        }
        assert!(app.messages.len() <= 5);
    }
}
