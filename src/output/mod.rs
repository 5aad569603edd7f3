//! Terminal output formatting
//!
//! Display utilities for the console game loop and text shared with the TUI.

pub mod display;
pub mod formatters;

pub use display::{
    write_feedback, write_final_message, write_guess_error, write_turn_status, write_welcome,
};
