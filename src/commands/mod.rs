//! Command implementations

pub mod simple;

pub use simple::{GameError, run_simple, run_simple_stdio};
