//! Interactive TUI front end
//!
//! Full-screen alternative to the line-based console loop, driving the same `Game`.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
